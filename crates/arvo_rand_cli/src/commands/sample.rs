//! Sample command implementation
//!
//! Prints a run of uniform draws from the configured generator.

use std::io::Write;

use arvo_rand::{Generator, UniformRng};
use tracing::info;

use crate::config::CliConfig;
use crate::output;
use crate::Result;

/// Draws `count` values, either one at a time or in a single batch call.
pub fn draw(config: &CliConfig, count: usize, batch: bool) -> Result<Vec<f64>> {
    let mut rng = Generator::new(config.generator, config.seed);
    let mut values = vec![0.0; count];
    if batch {
        rng.eval_batch(count, &mut values)?;
    } else {
        for value in values.iter_mut() {
            *value = rng.next_uniform();
        }
    }
    Ok(values)
}

/// Run the sample command
pub fn run<W: Write>(config: &CliConfig, count: usize, batch: bool, out: &mut W) -> Result<()> {
    info!(
        generator = %config.generator,
        seed = config.seed,
        count,
        batch,
        "Sampling"
    );

    let values = draw(config, count, batch)?;
    output::write_samples(out, config.format, config.generator, config.seed, &values)?;

    info!("Sampling complete");
    Ok(())
}
