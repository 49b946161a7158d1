use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions that end a run.
///
/// Empty-stack pops, malformed numeric input and end of input are defined
/// behavior and never show up here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown instruction {:?} (code {code}) at ({x}, {y})", char::from(*code))]
    UnknownInstruction { code: u8, x: usize, y: usize },
    #[error("grid access out of bounds at ({x}, {y})")]
    OutOfBounds { x: i64, y: i64 },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read program {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
