use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::grid::{HEIGHT, WIDTH};

/// One of the four cardinal directions the program counter can travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Position and heading of the instruction pointer on the torus.
///
/// The position is always within the grid: `advance` wraps modulo the
/// grid width and height, so the counter can never leave the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramCounter {
    x: usize,
    y: usize,
    pub direction: Direction,
}

impl Default for ProgramCounter {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            direction: Direction::Right,
        }
    }
}

impl ProgramCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter at an arbitrary position; coordinates are wrapped onto the grid.
    pub fn at(x: usize, y: usize, direction: Direction) -> Self {
        Self {
            x: x % WIDTH,
            y: y % HEIGHT,
            direction,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Move one cell in the current direction, wrapping at the edges.
    #[inline(always)]
    pub fn advance(&mut self) {
        match self.direction {
            Direction::Right => self.x = (self.x + 1) % WIDTH,
            Direction::Left => self.x = (self.x + WIDTH - 1) % WIDTH,
            Direction::Down => self.y = (self.y + 1) % HEIGHT,
            Direction::Up => self.y = (self.y + HEIGHT - 1) % HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_defaults() {
        let pc = ProgramCounter::new();
        assert_eq!(pc.position(), (0, 0));
        assert_eq!(pc.direction, Direction::Right);
    }

    #[test]
    fn test_advance_right_wraps() {
        let mut pc = ProgramCounter::at(WIDTH - 1, 3, Direction::Right);
        pc.advance();
        assert_eq!(pc.position(), (0, 3));
    }

    #[test]
    fn test_advance_left_wraps() {
        let mut pc = ProgramCounter::at(0, 3, Direction::Left);
        pc.advance();
        assert_eq!(pc.position(), (WIDTH - 1, 3));
    }

    #[test]
    fn test_advance_up_wraps() {
        let mut pc = ProgramCounter::at(7, 0, Direction::Up);
        pc.advance();
        assert_eq!(pc.position(), (7, HEIGHT - 1));
    }

    #[test]
    fn test_advance_down_wraps() {
        let mut pc = ProgramCounter::at(7, HEIGHT - 1, Direction::Down);
        pc.advance();
        assert_eq!(pc.position(), (7, 0));
    }

    #[test]
    fn test_advance_does_not_change_direction() {
        let mut pc = ProgramCounter::at(5, 5, Direction::Up);
        pc.advance();
        assert_eq!(pc.direction, Direction::Up);
        assert_eq!(pc.position(), (5, 4));
    }

    #[test]
    fn test_full_lap_returns_to_start() {
        let mut pc = ProgramCounter::at(10, 10, Direction::Left);
        for _ in 0..WIDTH {
            pc.advance();
        }
        assert_eq!(pc.position(), (10, 10));
        pc.direction = Direction::Down;
        for _ in 0..HEIGHT {
            pc.advance();
        }
        assert_eq!(pc.position(), (10, 10));
    }

    #[test]
    fn test_at_wraps_coordinates() {
        let pc = ProgramCounter::at(WIDTH + 2, HEIGHT + 1, Direction::Right);
        assert_eq!(pc.position(), (2, 1));
    }

    #[test]
    fn test_sampling_covers_all_directions() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let dir: Direction = rng.r#gen();
            let idx = Direction::ALL.iter().position(|&d| d == dir).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
