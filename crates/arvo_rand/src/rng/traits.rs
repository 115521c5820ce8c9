//! The contract shared by every generator.

use crate::error::RandError;
use crate::perm;

/// A seedable source of uniform draws in [0, 1).
///
/// Implementors supply [`reseed`](UniformRng::reseed) and
/// [`next_uniform`](UniformRng::next_uniform); batch draws and permutations
/// are built on top and are observationally identical to repeated scalar
/// draws.
///
/// # Examples
///
/// ```rust
/// use arvo_rand::rng::{ParkMiller, UniformRng};
///
/// let mut rng = ParkMiller::from_seed(7);
/// rng.reseed(7);
///
/// let value = rng.next_uniform();
/// assert!((0.0..1.0).contains(&value));
/// ```
pub trait UniformRng {
    /// Reinitialises all internal state from `seed`.
    ///
    /// Negative seeds behave exactly like their absolute value. May be called
    /// any number of times; each call restarts the stream deterministically.
    fn reseed(&mut self, seed: i32);

    /// Advances the state by one step and returns a value in [0, 1).
    fn next_uniform(&mut self) -> f64;

    /// Fills the whole buffer with consecutive draws.
    ///
    /// Writes the same values, in the same order, as `buffer.len()` calls to
    /// [`next_uniform`](UniformRng::next_uniform). An empty buffer is a no-op.
    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }

    /// Writes `count` draws into the front of `out`.
    ///
    /// Slots past `count` are left untouched and `count == 0` draws nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::BufferTooSmall`] when `out.len() < count`; no
    /// draws are consumed in that case.
    fn eval_batch(&mut self, count: usize, out: &mut [f64]) -> Result<(), RandError> {
        let actual = out.len();
        let dest = out.get_mut(..count).ok_or(RandError::BufferTooSmall {
            required: count,
            actual,
        })?;
        self.fill_uniform(dest);
        Ok(())
    }

    /// Writes a random permutation of `0..len` into the front of `out`.
    ///
    /// Consumes `len - 1` draws (none for `len <= 1`).
    ///
    /// # Errors
    ///
    /// Returns [`RandError::BufferTooSmall`] when `out.len() < len`; `out` is
    /// left untouched and no draws are consumed in that case.
    fn permutation_into(&mut self, len: usize, out: &mut [usize]) -> Result<(), RandError> {
        let actual = out.len();
        match out.get_mut(..len) {
            Some(dest) => {
                perm::shuffle_identity(self, dest);
                Ok(())
            }
            None => {
                tracing::debug!(len, actual, "permutation rejected: destination too short");
                Err(RandError::BufferTooSmall {
                    required: len,
                    actual,
                })
            }
        }
    }

    /// Returns a freshly allocated random permutation of `0..len`.
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut out = vec![0; len];
        perm::shuffle_identity(self, &mut out);
        out
    }
}
