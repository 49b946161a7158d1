use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::instruction::Instruction;
use crate::pc::{Direction, ProgramCounter};
use crate::random::DirectionSource;
use crate::stack::DataStack;

/// Pushed by `~` when the input is exhausted.
pub const EOF_CHAR: i64 = -1;

/// A Befunge-93 machine bound to a program grid.
///
/// Each step fetches the cell under the program counter, executes it and
/// then advances the counter. The grid is borrowed mutably for the whole
/// run because `p` rewrites the program as it executes.
///
/// `input` feeds `&` and `~`, `output` receives `,` and `.`, and
/// `directions` decides where `?` goes.
pub struct Interpreter<'g, R, W, D> {
    grid: &'g mut Grid,
    stack: DataStack,
    pc: ProgramCounter,
    string_mode: bool,
    halted: bool,
    steps: usize,
    input: R,
    output: W,
    directions: D,
}

impl<'g, R: BufRead, W: Write, D: DirectionSource> Interpreter<'g, R, W, D> {
    pub fn new(grid: &'g mut Grid, input: R, output: W, directions: D) -> Self {
        Self {
            grid,
            stack: DataStack::new(),
            pc: ProgramCounter::new(),
            string_mode: false,
            halted: false,
            steps: 0,
            input,
            output,
            directions,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn stack(&self) -> &DataStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut DataStack {
        &mut self.stack
    }

    pub fn pc(&self) -> &ProgramCounter {
        &self.pc
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn is_string_mode(&self) -> bool {
        self.string_mode
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Total steps executed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Run until `@` or a fatal error.
    pub fn run(&mut self) -> Result<()> {
        while !self.halted {
            self.step()?;
        }
        log::debug!("halted after {} steps", self.steps);
        Ok(())
    }

    /// Run until `@`, a fatal error, or `step_limit` steps have executed.
    ///
    /// Returns the number of steps executed by this call.
    pub fn run_for(&mut self, step_limit: usize) -> Result<usize> {
        let start = self.steps;
        while !self.halted && self.steps - start < step_limit {
            self.step()?;
        }
        if self.halted {
            log::debug!("halted after {} steps", self.steps);
        }
        Ok(self.steps - start)
    }

    /// Execute the instruction under the program counter, then advance.
    ///
    /// Does nothing once the program has halted. On error the counter is
    /// left on the offending cell.
    pub fn step(&mut self) -> Result<()> {
        if self.halted {
            return Ok(());
        }
        let (x, y) = self.pc.position();
        let byte = self.grid.cell(x, y);
        log::trace!("step {} at ({x}, {y}) {:?}: {:?}", self.steps, self.pc.direction, byte as char);

        self.execute(byte)?;
        self.pc.advance();
        self.steps += 1;
        Ok(())
    }

    fn execute(&mut self, byte: u8) -> Result<()> {
        if self.string_mode && byte != b'"' {
            self.stack.push(i64::from(byte));
            return Ok(());
        }

        let (x, y) = self.pc.position();
        let instr = Instruction::decode(byte).ok_or(Error::UnknownInstruction { code: byte, x, y })?;

        match instr {
            Instruction::Digit(d) => self.stack.push(i64::from(d)),
            Instruction::Exit => self.halted = true,
            Instruction::Blank => {}
            Instruction::Swap => self.stack.swap(),
            Instruction::Dup => self.stack.duplicate(),
            Instruction::Pop => {
                self.stack.pop();
            }
            Instruction::OutputAscii => {
                let value = self.stack.pop();
                self.output.write_all(&[value.rem_euclid(256) as u8])?;
                self.output.flush()?;
            }
            Instruction::OutputInt => {
                let value = self.stack.pop();
                write!(self.output, "{value} ")?;
                self.output.flush()?;
            }
            Instruction::Add => self.binary(i64::wrapping_add),
            Instruction::Subtract => self.binary(i64::wrapping_sub),
            Instruction::Multiply => self.binary(i64::wrapping_mul),
            Instruction::Divide => self.binary(floor_div),
            Instruction::Modulo => self.binary(floor_mod),
            Instruction::Not => {
                let value = self.stack.pop();
                self.stack.push(i64::from(value == 0));
            }
            Instruction::Greater => self.binary(|lhs, rhs| i64::from(lhs > rhs)),
            Instruction::Right => self.pc.direction = Direction::Right,
            Instruction::Left => self.pc.direction = Direction::Left,
            Instruction::Up => self.pc.direction = Direction::Up,
            Instruction::Down => self.pc.direction = Direction::Down,
            Instruction::Random => self.pc.direction = self.directions.next_direction(),
            Instruction::HorizontalIf => {
                let value = self.stack.pop();
                self.pc.direction = if value == 0 { Direction::Right } else { Direction::Left };
            }
            Instruction::VerticalIf => {
                let value = self.stack.pop();
                self.pc.direction = if value == 0 { Direction::Down } else { Direction::Up };
            }
            Instruction::Get => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let cell = self.grid.read(x, y)?;
                self.stack.push(i64::from(cell));
            }
            Instruction::Put => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let value = self.stack.pop();
                self.grid.write(x, y, value)?;
            }
            Instruction::InputInt => {
                let value = self.read_int()?;
                self.stack.push(value);
            }
            Instruction::InputChar => {
                let value = self.read_char()?;
                self.stack.push(value);
            }
            Instruction::Bridge => self.pc.advance(),
            Instruction::StringMode => self.string_mode = !self.string_mode,
        }
        Ok(())
    }

    /// Pop rhs, pop lhs, push `op(lhs, rhs)`.
    #[inline(always)]
    fn binary(&mut self, op: impl FnOnce(i64, i64) -> i64) {
        let rhs = self.stack.pop();
        let lhs = self.stack.pop();
        self.stack.push(op(lhs, rhs));
    }

    /// One line of input parsed as an integer; 0 on EOF or garbage.
    fn read_int(&mut self) -> Result<i64> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            log::debug!("end of input on '&', pushing 0");
            return Ok(0);
        }
        let text = String::from_utf8_lossy(&line);
        match leading_int(&text) {
            Some(value) => Ok(value),
            None => {
                log::debug!("malformed integer input {:?}, pushing 0", text.trim());
                Ok(0)
            }
        }
    }

    /// One raw byte of input; `EOF_CHAR` when exhausted.
    fn read_char(&mut self) -> Result<i64> {
        let byte = self.input.fill_buf()?.first().copied();
        match byte {
            Some(b) => {
                self.input.consume(1);
                Ok(i64::from(b))
            }
            None => {
                log::debug!("end of input on '~', pushing {EOF_CHAR}");
                Ok(EOF_CHAR)
            }
        }
    }
}

/// The optionally signed decimal number at the start of `text`, after
/// leading whitespace. Anything following the digits is ignored.
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

/// Quotient rounded toward negative infinity; 0 when dividing by zero.
fn floor_div(lhs: i64, rhs: i64) -> i64 {
    if rhs == 0 {
        log::debug!("division by zero ({lhs} / 0), pushing 0");
        return 0;
    }
    let q = lhs.wrapping_div(rhs);
    if lhs.wrapping_rem(rhs) != 0 && ((lhs < 0) != (rhs < 0)) {
        q - 1
    } else {
        q
    }
}

/// Remainder with the sign of the divisor; 0 when dividing by zero.
fn floor_mod(lhs: i64, rhs: i64) -> i64 {
    if rhs == 0 {
        log::debug!("modulo by zero ({lhs} % 0), pushing 0");
        return 0;
    }
    let r = lhs.wrapping_rem(rhs);
    if r != 0 && ((r < 0) != (rhs < 0)) { r + rhs } else { r }
}
