//! Verify command implementation
//!
//! Re-checks the reproducibility contract for the configured generator and
//! seed: determinism, range, batch equivalence, reseeding and permutation
//! validity, plus the Park-Miller reference values.

use std::io::Write;

use arvo_rand::{Generator, ParkMiller, UniformRng};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::output::{self, CheckResult};
use crate::{CliError, Result};

/// Runs every check and returns the outcomes in a fixed order.
pub fn checks(config: &CliConfig, draws: usize) -> Vec<CheckResult> {
    let fresh = || Generator::new(config.generator, config.seed);

    let mut reference = fresh();
    let scalar: Vec<f64> = (0..draws).map(|_| reference.next_uniform()).collect();

    vec![
        check_determinism(&scalar, fresh()),
        check_range(&scalar),
        check_batch(&scalar, fresh()),
        check_reseed(&scalar, reference, config.seed),
        check_permutation(draws, fresh()),
        check_park_miller_reference(),
    ]
}

fn check_determinism(scalar: &[f64], mut rng: Generator) -> CheckResult {
    let mismatch = scalar.iter().position(|&v| v != rng.next_uniform());
    CheckResult {
        name: "determinism",
        passed: mismatch.is_none(),
        detail: match mismatch {
            None => format!("{} draws repeated", scalar.len()),
            Some(i) => format!("first mismatch at draw {}", i),
        },
    }
}

fn check_range(scalar: &[f64]) -> CheckResult {
    let outside = scalar.iter().position(|v| !(0.0..1.0).contains(v));
    CheckResult {
        name: "range",
        passed: outside.is_none(),
        detail: match outside {
            None => "all draws in [0, 1)".to_string(),
            Some(i) => format!("draw {} = {}", i, scalar[i]),
        },
    }
}

fn check_batch(scalar: &[f64], mut rng: Generator) -> CheckResult {
    let mut batch = vec![0.0; scalar.len()];
    let outcome = rng.eval_batch(scalar.len(), &mut batch);
    let passed = outcome.is_ok() && batch == scalar;
    CheckResult {
        name: "batch-equivalence",
        passed,
        detail: match outcome {
            Err(err) => err.to_string(),
            Ok(()) if passed => "batch matches scalar draws".to_string(),
            Ok(()) => "batch differs from scalar draws".to_string(),
        },
    }
}

fn check_reseed(scalar: &[f64], mut rng: Generator, seed: i32) -> CheckResult {
    rng.reseed(seed);
    let passed = scalar.iter().all(|&v| v == rng.next_uniform());
    CheckResult {
        name: "reseed",
        passed,
        detail: if passed {
            "reseed restarts the stream".to_string()
        } else {
            "reseed did not restart the stream".to_string()
        },
    }
}

fn check_permutation(len: usize, mut rng: Generator) -> CheckResult {
    let mut sorted = rng.permutation(len);
    sorted.sort_unstable();
    let passed = sorted.iter().copied().eq(0..len);
    CheckResult {
        name: "permutation",
        passed,
        detail: format!("length {}", len),
    }
}

fn check_park_miller_reference() -> CheckResult {
    let mut rng = ParkMiller::from_seed(1);
    let first = rng.next_uniform();
    for _ in 1..10_000 {
        rng.next_uniform();
    }
    let passed = first == 16807.0 * 4.656612875e-10 && rng.state() == 1_043_618_065;
    CheckResult {
        name: "park-miller-reference",
        passed,
        detail: format!("first draw {:e}, state after 10000 draws {}", first, rng.state()),
    }
}

/// Run the verify command
pub fn run<W: Write>(config: &CliConfig, draws: usize, out: &mut W) -> Result<()> {
    info!(
        generator = %config.generator,
        seed = config.seed,
        draws,
        "Verifying"
    );

    let results = checks(config, draws);
    output::write_checks(out, config.format, config.generator, config.seed, &results)?;

    let failed: Vec<&str> = results
        .iter()
        .filter(|c| !c.passed)
        .map(|c| c.name)
        .collect();
    if failed.is_empty() {
        info!("All checks passed");
        Ok(())
    } else {
        warn!(failed = ?failed, "Verification failed");
        Err(CliError::VerificationFailed(failed.join(", ")))
    }
}
