//! Error types for structured error handling.
//!
//! The generators themselves are total: every `i32` seed and every draw count
//! is valid. Errors only arise at the boundary where a caller hands in a
//! destination buffer or names a generator by string.

use thiserror::Error;

/// Errors from batch draws, permutations and generator selection.
///
/// # Examples
/// ```
/// use arvo_rand::RandError;
///
/// let err = RandError::BufferTooSmall { required: 8, actual: 4 };
/// assert_eq!(
///     format!("{}", err),
///     "Destination buffer too small: need 8 slots, got 4"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandError {
    /// The destination slice is shorter than the requested count.
    #[error("Destination buffer too small: need {required} slots, got {actual}")]
    BufferTooSmall {
        /// Number of slots the request needs
        required: usize,
        /// Length of the slice supplied
        actual: usize,
    },

    /// A generator name did not match any known algorithm.
    #[error("Unknown generator: {0}. Supported: shuffled, multiple-prime, park-miller")]
    UnknownGenerator(String),
}
