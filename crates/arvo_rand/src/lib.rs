//! # arvo_rand: Reproducible Random Streams for Quantisation Search
//!
//! ## Role
//!
//! arvo_rand supplies the pseudo-random numbers used by the texture-compression
//! search to pick randomised candidate samples. The goal is bit-for-bit
//! reproducible sequences for a given seed, not statistical strength:
//! - Three classic generators sharing one contract (`rng`)
//! - Uniform random permutations of `0..n` built on any of them (`perm`)
//! - Structured errors for invalid requests (`error`)
//!
//! ## Generators
//!
//! | Type                          | Algorithm                                   |
//! |-------------------------------|---------------------------------------------|
//! | [`rng::ShuffledCongruential`] | Congruential stream behind a 97-slot shuffle table |
//! | [`rng::MultiplePrime`]        | Haas multiple-prime additive generator      |
//! | [`rng::ParkMiller`]           | Park-Miller minimal standard, modulus 2^31 − 1 |
//!
//! ## Usage Example
//!
//! ```rust
//! use arvo_rand::rng::{Generator, GeneratorKind, UniformRng};
//!
//! let mut rng = Generator::new(GeneratorKind::ParkMiller, 1);
//! let first = rng.next_uniform();
//! assert!((first - 16807.0 * 4.656612875e-10).abs() < 1e-18);
//!
//! // Batch draws are identical to repeated scalar draws
//! let mut buffer = [0.0; 8];
//! rng.fill_uniform(&mut buffer);
//!
//! // Permutation of 0..10
//! let perm = rng.permutation(10);
//! assert_eq!(perm.len(), 10);
//! ```
//!
//! ## Threading
//!
//! Generators own their state exclusively and are `Send`. A single instance
//! must not be shared between threads; give each worker its own generator
//! with its own seed.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`rng::GeneratorKind`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod perm;
pub mod rng;

pub use error::RandError;
pub use rng::{
    Generator, GeneratorKind, MultiplePrime, ParkMiller, ShuffledCongruential, UniformRng,
};
