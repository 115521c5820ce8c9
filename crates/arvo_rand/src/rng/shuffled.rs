//! Shuffled congruential generator.
//!
//! From "Numerical Recipes" by Press, Flannery, Teukolsky and Vetterling,
//! p. 197. A linear congruential stream is passed through a 97-slot shuffle
//! table: each draw reads a slot chosen by the previous output and refills it
//! with the next congruential value.

use super::traits::UniformRng;

/// Number of active slots in the shuffle table.
const TABLE_SIZE: usize = 97;
/// Congruential modulus.
const M1: i64 = 714_025;
/// Congruential multiplier.
const IA: i64 = 1366;
/// Congruential increment.
const IC: i64 = 150_889;
/// Output scale, slightly above 1 / M1.
const RM: f64 = 1.400512e-6;

/// Numerical Recipes shuffled congruential generator.
///
/// # Examples
///
/// ```rust
/// use arvo_rand::rng::{ShuffledCongruential, UniformRng};
///
/// let mut rng = ShuffledCongruential::from_seed(1);
/// let value = rng.next_uniform();
/// assert!((value - 0.670115581248).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledCongruential {
    /// Last value read from the table; selects the next slot.
    index: i64,
    /// Congruential state used to refill the table.
    seed: i64,
    /// Shuffle table. Entries are always in `[0, M1)`.
    table: [i64; TABLE_SIZE],
}

impl ShuffledCongruential {
    /// Creates a generator initialised from `seed`.
    pub fn from_seed(seed: i32) -> Self {
        let mut rng = Self {
            index: 0,
            seed: 0,
            table: [0; TABLE_SIZE],
        };
        rng.reseed(seed);
        rng
    }

    #[inline]
    fn step(t: i64) -> i64 {
        (IA * t + IC) % M1
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &[i64; TABLE_SIZE] {
        &self.table
    }
}

impl UniformRng for ShuffledCongruential {
    fn reseed(&mut self, seed: i32) {
        let mut t = (IC + i64::from(seed).abs() + 1) % M1;
        for slot in self.table.iter_mut() {
            t = Self::step(t);
            *slot = t.abs();
        }
        t = Self::step(t);
        self.seed = t.abs();
        self.index = t.abs();
    }

    #[inline]
    fn next_uniform(&mut self) -> f64 {
        // Slot numbers run 1..=97 as in the published algorithm.
        let offset = (1 + (TABLE_SIZE as i64 * self.index) / M1).clamp(1, TABLE_SIZE as i64);
        let slot = &mut self.table[(offset - 1) as usize];
        self.index = *slot;
        self.seed = Self::step(self.seed);
        *slot = self.seed;
        self.index as f64 * RM
    }
}
