/// The Befunge-93 data stack.
///
/// An unbounded LIFO of signed integers. Popping an empty stack yields 0
/// and leaves it empty, so every opcode can treat missing operands as
/// implicit zeros.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DataStack {
    values: Vec<i64>,
}

impl DataStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Remove and return the top value, or 0 if the stack is empty.
    #[inline(always)]
    pub fn pop(&mut self) -> i64 {
        self.values.pop().unwrap_or(0)
    }

    /// Exchange the top two values. Missing values are filled with zeros.
    pub fn swap(&mut self) {
        let a = self.pop();
        let b = self.pop();
        self.push(a);
        self.push(b);
    }

    /// Push a second copy of the top value (two zeros on an empty stack).
    pub fn duplicate(&mut self) {
        let top = self.pop();
        self.push(top);
        self.push(top);
    }

    pub fn peek(&self) -> Option<i64> {
        self.values.last().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from bottom to top.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}
