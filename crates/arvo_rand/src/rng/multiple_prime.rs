//! Multiple-prime additive generator.
//!
//! From "The Multiple Prime Random Number Generator" by Alexander Haas,
//! ACM Transactions on Mathematical Software, Vol. 13, No. 4, December 1987,
//! pp. 368-381.

use super::traits::UniformRng;

const MODULUS: i64 = 100_000;
/// 1 / 9999, truncated so that the largest output stays below 1.
const SCALE: f64 = 1.00010001e-4;

/// Haas multiple-prime generator with four integer registers.
///
/// Once in range, the registers stay in `m ∈ [100, 9973)`,
/// `i ∈ [10000, 99991)` and `j ∈ [128000, 224729)`. Seeds with
/// `|seed| <= 1410` start in range; larger seeds reach it after a finite
/// number of draws.
///
/// # Examples
///
/// ```rust
/// use arvo_rand::rng::{MultiplePrime, UniformRng};
///
/// let mut rng = MultiplePrime::from_seed(1);
/// assert!((rng.next_uniform() - 0.139813981398).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplePrime {
    r: i64,
    m: i64,
    i: i64,
    j: i64,
}

impl MultiplePrime {
    /// Creates a generator initialised from `seed`.
    pub fn from_seed(seed: i32) -> Self {
        let mut rng = Self {
            r: 0,
            m: 0,
            i: 0,
            j: 0,
        };
        rng.reseed(seed);
        rng
    }

    #[cfg(test)]
    pub(crate) fn registers(&self) -> (i64, i64, i64, i64) {
        (self.r, self.m, self.i, self.j)
    }
}

impl UniformRng for MultiplePrime {
    fn reseed(&mut self, seed: i32) {
        let s = i64::from(seed);
        self.r = s.abs();
        self.m = (s * 7).abs();
        self.i = (s * 11).abs();
        self.j = (s * 13).abs();
        if self.m < 100 {
            self.m += 100;
        }
        if self.i < 10_000 {
            self.i += 10_000;
        }
        if self.j < 128_000 {
            self.j += 128_000;
        }
    }

    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.m += 7;
        if self.m >= 9973 {
            self.m -= 9871;
        }
        self.i += 1907;
        if self.i >= 99_991 {
            self.i -= 89_989;
        }
        self.j += 73_939;
        if self.j >= 224_729 {
            self.j -= 96_233;
        }
        // Reducing both factors first gives the same residue without overflow
        // on the first draw after a large seed.
        let product = (self.r % MODULUS) * (self.m % MODULUS);
        self.r = ((product + self.i + self.j) % MODULUS) / 10;
        self.r as f64 * SCALE
    }
}
