use crate::board::Board;
use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// Source of random numbers used to sample positions.
pub trait RandomGenerator {
    /// Returns a non-negative random number.
    fn next(&mut self) -> i32;

    /// Returns a random number in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks a random element of a non-empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }
}

/// Thread-local `rand` generator. Not reproducible between runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::rng().random_range(0..i32::MAX)
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// Linear congruential generator with a fixed seed, for reproducible sampling.
#[derive(Debug, Clone)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl CustomNumberGenerator {
    /// Creates a generator from `seed`. Any seed is accepted and reduced modulo
    /// `i32::MAX`.
    pub const fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(i32::MAX as i64),
        }
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C).rem_euclid(i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        self.next() % (to - from) + from
    }
}

/// Plays up to `plies` uniformly random legal moves from `board`, stopping early if the game
/// ends. Returns the reached position.
pub fn random_playout<T: Board, K: RandomGenerator>(board: &T, plies: usize, rng: &mut K) -> T {
    let mut current = board.clone();
    for _ in 0..plies {
        let moves = current.get_available_moves();
        match rng.choose(&moves) {
            Some(b_move) => current = current.apply_move(b_move),
            None => break,
        }
    }
    current
}
