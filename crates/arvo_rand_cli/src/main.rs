//! arvo-rand CLI - Reproducible Random Streams
//!
//! Operational front end for the arvo_rand generators, used to produce
//! reference traces and to check a build against them.
//!
//! # Commands
//!
//! - `arvo-rand sample --count <n>` - Print uniform draws
//! - `arvo-rand perm --len <n>` - Print a random permutation of 0..n
//! - `arvo-rand verify` - Check determinism, range and batch equivalence

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// arvo-rand: deterministic generators for quantisation search
#[derive(Parser)]
#[command(name = "arvo-rand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generator (shuffled, multiple-prime, park-miller or method1..3)
    #[arg(short, long, global = true)]
    generator: Option<String>,

    /// Seed; negative values behave as their absolute value
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print uniform draws in [0, 1)
    Sample {
        /// Number of draws
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Use one batch call instead of scalar draws (output is identical)
        #[arg(short, long)]
        batch: bool,
    },

    /// Print a random permutation of 0..len
    Perm {
        /// Permutation length
        #[arg(short, long, default_value = "10")]
        len: usize,
    },

    /// Check determinism, range, batch equivalence and permutations
    Verify {
        /// Number of draws to check
        #[arg(short, long, default_value = "10000")]
        draws: usize,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            generator: cli.generator.clone(),
            seed: cli.seed,
            log_level: cli.log_level.clone(),
            format: cli.format.clone(),
            verbose: cli.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());

    info!("arvo-rand v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        generator = %config.generator,
        seed = config.seed,
        log_level = %config.log_level,
        format = %config.format,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Sample { count, batch } => commands::sample::run(&config, count, batch, &mut out),
        Commands::Perm { len } => commands::perm::run(&config, len, &mut out),
        Commands::Verify { draws } => commands::verify::run(&config, draws, &mut out),
    }
}
