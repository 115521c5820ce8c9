//! # Random Number Generation
//!
//! This module provides the three legacy generators used by the quantisation
//! search, behind a single contract.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Reseeding with the same value reproduces the same
//!   stream on every run and platform
//! - **Efficiency**: Batch draws write into caller-provided `&mut [f64]`
//!   slices without allocating
//! - **Static dispatch**: [`Generator`] is an enum over the concrete types;
//!   the variant is chosen at construction time
//!
//! ## Module Structure
//!
//! - [`UniformRng`]: the shared seed / draw / batch-draw contract
//! - [`ShuffledCongruential`]: Numerical Recipes shuffled congruential generator
//! - [`MultiplePrime`]: Haas multiple-prime generator
//! - [`ParkMiller`]: Schrage / Park-Miller multiplicative congruential generator
//! - [`Generator`], [`GeneratorKind`]: construction-time variant selection
//!
//! ## Usage Example
//!
//! ```rust
//! use arvo_rand::rng::{MultiplePrime, UniformRng};
//!
//! let mut a = MultiplePrime::from_seed(42);
//! let mut b = MultiplePrime::from_seed(42);
//!
//! let mut batch = vec![0.0; 16];
//! a.fill_uniform(&mut batch);
//!
//! for &value in &batch {
//!     assert_eq!(value, b.next_uniform());
//! }
//! ```

mod generator;
mod multiple_prime;
mod park_miller;
mod shuffled;
mod traits;

// Public re-exports
pub use generator::{Generator, GeneratorKind};
pub use multiple_prime::MultiplePrime;
pub use park_miller::ParkMiller;
pub use shuffled::ShuffledCongruential;
pub use traits::UniformRng;
