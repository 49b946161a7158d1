use std::path::Path;

use crate::error::{Error, Result};

/// Columns in a Befunge-93 program.
pub const WIDTH: usize = 80;
/// Rows in a Befunge-93 program.
pub const HEIGHT: usize = 25;

const BLANK: u8 = b' ';

/// The fixed 80x25 program space.
///
/// Cells hold character codes. The grid is both the program and the only
/// addressable memory: `g` and `p` read and rewrite the same cells the
/// program counter executes, so every fetch goes straight to `cells`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; WIDTH]; HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: [[BLANK; WIDTH]; HEIGHT],
        }
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid").field("rows", &self.dump()).finish()
    }
}

impl Grid {
    /// An all-blank grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from up to 25 lines of program text.
    ///
    /// Each line is truncated to 80 bytes and padded with spaces; rows past
    /// the 25th are ignored and missing rows stay blank.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut grid = Self::new();
        for (row, line) in grid.cells.iter_mut().zip(lines) {
            let line = line.as_ref();
            let len = line.len().min(WIDTH);
            row[..len].copy_from_slice(&line[..len]);
        }
        log::debug!("loaded program grid ({} non-blank cells)", grid.occupied());
        grid
    }

    /// Build a grid from raw program source, splitting on `\n` and
    /// dropping a trailing `\r` from each line.
    pub fn parse(source: &[u8]) -> Self {
        Self::from_lines(
            source
                .split(|&b| b == b'\n')
                .map(|line| line.strip_suffix(b"\r").unwrap_or(line)),
        )
    }

    /// Read a program file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read(path).map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", source.len(), path.display());
        Ok(Self::parse(&source))
    }

    /// Bounds-checked read. Coordinates never wrap.
    pub fn read(&self, x: i64, y: i64) -> Result<u8> {
        let (col, row) = Self::index(x, y)?;
        Ok(self.cells[row][col])
    }

    /// Bounds-checked write. Only the low 8 bits of `value` are stored.
    pub fn write(&mut self, x: i64, y: i64, value: i64) -> Result<()> {
        let (col, row) = Self::index(x, y)?;
        self.cells[row][col] = value.rem_euclid(256) as u8;
        Ok(())
    }

    /// Fetch for an already wrapped position.
    #[inline(always)]
    pub(crate) fn cell(&self, x: usize, y: usize) -> u8 {
        self.cells[y][x]
    }

    fn index(x: i64, y: i64) -> Result<(usize, usize)> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(col), Ok(row)) if col < WIDTH && row < HEIGHT => Ok((col, row)),
            _ => Err(Error::OutOfBounds { x, y }),
        }
    }

    fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|&&b| b != BLANK).count()
    }

    /// Render the grid as text, one line per row with trailing blanks and
    /// trailing empty rows removed. Non-printable cells are shown as `.`.
    pub fn dump(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| {
                let text: String = row
                    .iter()
                    .map(|&b| if b.is_ascii_graphic() || b == BLANK { b as char } else { '.' })
                    .collect();
                text.trim_end().to_string()
            })
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}
