use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::pc::Direction;

/// Where `?` gets its direction from.
///
/// The interpreter is generic over this trait so runs can use real
/// randomness, a seeded generator, or a fixed script.
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

impl<D: DirectionSource + ?Sized> DirectionSource for &mut D {
    fn next_direction(&mut self) -> Direction {
        (**self).next_direction()
    }
}

/// Uniformly random directions drawn from any `Rng`.
pub struct RandomDirections<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomDirections<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDirections<SmallRng> {
    /// Reproducible directions from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> DirectionSource for RandomDirections<R> {
    fn next_direction(&mut self) -> Direction {
        self.rng.r#gen()
    }
}

/// Replays a fixed sequence of directions, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedDirections {
    script: Vec<Direction>,
    next: usize,
}

impl ScriptedDirections {
    /// An empty script always yields `Direction::Right`.
    pub fn new(script: impl Into<Vec<Direction>>) -> Self {
        Self {
            script: script.into(),
            next: 0,
        }
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        if self.script.is_empty() {
            return Direction::Right;
        }
        let dir = self.script[self.next % self.script.len()];
        self.next += 1;
        dir
    }
}
