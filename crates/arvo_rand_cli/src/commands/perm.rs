//! Perm command implementation
//!
//! Prints a random permutation of `0..len`.

use std::io::Write;

use arvo_rand::{Generator, UniformRng};
use tracing::info;

use crate::config::CliConfig;
use crate::output;
use crate::Result;

/// Run the perm command
pub fn run<W: Write>(config: &CliConfig, len: usize, out: &mut W) -> Result<()> {
    info!(
        generator = %config.generator,
        seed = config.seed,
        len,
        "Building permutation"
    );

    let mut rng = Generator::new(config.generator, config.seed);
    let perm = rng.permutation(len);
    output::write_permutation(out, config.format, config.generator, config.seed, &perm)?;

    info!("Permutation complete");
    Ok(())
}
