//! Construction-time selection between the three generators.

use std::fmt;
use std::str::FromStr;

use super::multiple_prime::MultiplePrime;
use super::park_miller::ParkMiller;
use super::shuffled::ShuffledCongruential;
use super::traits::UniformRng;
use crate::error::RandError;

/// Names one of the generator algorithms.
///
/// Parses from the algorithm name or from its legacy method number.
///
/// # Examples
///
/// ```rust
/// use arvo_rand::rng::GeneratorKind;
///
/// let kind: GeneratorKind = "method3".parse().unwrap();
/// assert_eq!(kind, GeneratorKind::ParkMiller);
/// assert_eq!(kind.to_string(), "park-miller");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GeneratorKind {
    /// Method 1: shuffled congruential (Numerical Recipes)
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "method1"))]
    Shuffled,
    /// Method 2: multiple-prime additive (Haas)
    #[cfg_attr(feature = "serde", serde(alias = "method2"))]
    MultiplePrime,
    /// Method 3: multiplicative congruential (Park-Miller)
    #[cfg_attr(feature = "serde", serde(alias = "method3"))]
    ParkMiller,
}

impl GeneratorKind {
    /// Every kind, in legacy method order.
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::Shuffled,
        GeneratorKind::MultiplePrime,
        GeneratorKind::ParkMiller,
    ];

    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Shuffled => "shuffled",
            GeneratorKind::MultiplePrime => "multiple-prime",
            GeneratorKind::ParkMiller => "park-miller",
        }
    }

    /// Legacy method number (1, 2 or 3).
    pub fn method_number(&self) -> u8 {
        match self {
            GeneratorKind::Shuffled => 1,
            GeneratorKind::MultiplePrime => 2,
            GeneratorKind::ParkMiller => 3,
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = RandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shuffled" | "method1" | "1" => Ok(GeneratorKind::Shuffled),
            "multiple-prime" | "multiple_prime" | "method2" | "2" => {
                Ok(GeneratorKind::MultiplePrime)
            }
            "park-miller" | "park_miller" | "method3" | "3" => Ok(GeneratorKind::ParkMiller),
            _ => Err(RandError::UnknownGenerator(s.to_string())),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three generators, chosen when it is built.
///
/// Dispatch is a `match` on the variant; there is no boxing.
///
/// # Examples
///
/// ```rust
/// use arvo_rand::rng::{Generator, GeneratorKind, UniformRng};
///
/// let mut rng = Generator::new(GeneratorKind::MultiplePrime, 42);
/// assert_eq!(rng.kind(), GeneratorKind::MultiplePrime);
///
/// let mut out = [0usize; 5];
/// rng.permutation_into(5, &mut out).unwrap();
/// let mut sorted = out;
/// sorted.sort_unstable();
/// assert_eq!(sorted, [0, 1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    /// Method 1
    Shuffled(ShuffledCongruential),
    /// Method 2
    MultiplePrime(MultiplePrime),
    /// Method 3
    ParkMiller(ParkMiller),
}

impl Generator {
    /// Builds a generator of the given kind, seeded with `seed`.
    pub fn new(kind: GeneratorKind, seed: i32) -> Self {
        tracing::debug!(kind = %kind, seed, "seeding generator");
        match kind {
            GeneratorKind::Shuffled => ShuffledCongruential::from_seed(seed).into(),
            GeneratorKind::MultiplePrime => MultiplePrime::from_seed(seed).into(),
            GeneratorKind::ParkMiller => ParkMiller::from_seed(seed).into(),
        }
    }

    /// Returns which algorithm this generator runs.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::Shuffled(_) => GeneratorKind::Shuffled,
            Generator::MultiplePrime(_) => GeneratorKind::MultiplePrime,
            Generator::ParkMiller(_) => GeneratorKind::ParkMiller,
        }
    }
}

impl From<ShuffledCongruential> for Generator {
    fn from(rng: ShuffledCongruential) -> Self {
        Generator::Shuffled(rng)
    }
}

impl From<MultiplePrime> for Generator {
    fn from(rng: MultiplePrime) -> Self {
        Generator::MultiplePrime(rng)
    }
}

impl From<ParkMiller> for Generator {
    fn from(rng: ParkMiller) -> Self {
        Generator::ParkMiller(rng)
    }
}

impl UniformRng for Generator {
    fn reseed(&mut self, seed: i32) {
        tracing::debug!(kind = %self.kind(), seed, "reseeding generator");
        match self {
            Generator::Shuffled(rng) => rng.reseed(seed),
            Generator::MultiplePrime(rng) => rng.reseed(seed),
            Generator::ParkMiller(rng) => rng.reseed(seed),
        }
    }

    #[inline]
    fn next_uniform(&mut self) -> f64 {
        match self {
            Generator::Shuffled(rng) => rng.next_uniform(),
            Generator::MultiplePrime(rng) => rng.next_uniform(),
            Generator::ParkMiller(rng) => rng.next_uniform(),
        }
    }

    // Dispatch once per batch rather than once per draw.
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        match self {
            Generator::Shuffled(rng) => rng.fill_uniform(buffer),
            Generator::MultiplePrime(rng) => rng.fill_uniform(buffer),
            Generator::ParkMiller(rng) => rng.fill_uniform(buffer),
        }
    }
}
