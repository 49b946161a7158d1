pub mod error;
pub mod stack;
pub mod pc;
pub mod grid;
pub mod instruction;
pub mod random;
pub mod interpreter;
