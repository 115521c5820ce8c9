//! Random permutations of `0..n`.
//!
//! Knuth shuffle driven by any [`UniformRng`]. Draws are requested in
//! batches of up to [`PERM_BATCH`]; because batch draws equal scalar draws,
//! the batch size changes call granularity only, never the permutation.
//!
//! Use the [`UniformRng::permutation_into`] and [`UniformRng::permutation`]
//! entry points.

use crate::rng::UniformRng;

/// Maximum number of draws requested from the generator at once.
pub const PERM_BATCH: usize = 20;

/// Overwrites `out` with the identity and shuffles it in place.
///
/// Consumes exactly `out.len() - 1` draws (none when `out.len() <= 1`).
pub(crate) fn shuffle_identity<G: UniformRng + ?Sized>(rng: &mut G, out: &mut [usize]) {
    for (j, slot) in out.iter_mut().enumerate() {
        *slot = j;
    }

    let mut batch = [0.0_f64; PERM_BATCH];
    let mut remaining = out.len().saturating_sub(1);
    let mut available = 0;
    let mut next = 0;

    for i in (1..out.len()).rev() {
        if next == available {
            available = remaining.min(PERM_BATCH);
            rng.fill_uniform(&mut batch[..available]);
            remaining -= available;
            next = 0;
        }
        let r = batch[next];
        next += 1;

        // Single-precision truncation matches legacy permutations. The
        // product can round up to i + 1; k >= i leaves element i in place.
        let k = ((i + 1) as f32 * r as f32) as usize;
        if k < i {
            out.swap(i, k);
        }
    }
}
