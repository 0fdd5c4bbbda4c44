//! # Main — CLI Entry Point
//!
//! Routes CLI subcommands to their execution functions. Handles shared
//! concerns: structured logging setup and the rayon thread pool
//! configuration.
//!
//! ## Subcommands
//!
//! With no subcommand the binary runs `demo`, the fixed six-value
//! walkthrough. `check` tests explicit values (optionally as JSON with the
//! full verdict), `range` scans an inclusive interval in parallel,
//! `generate` draws random primes of a given width, and `rsa-demo` walks a
//! message through a freshly generated textbook keypair.
//!
//! ## Global Options
//!
//! - `--threads`: Rayon thread pool size (0 = all cores).
//! - `LOG_FORMAT=json`: JSON log lines on stderr instead of human-readable.
//! - `RUST_LOG`: log filter, defaulting to `info`.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "primecert", about = "Deterministic 64-bit primality testing")]
struct Cli {
    /// Number of rayon worker threads (defaults to all logical cores)
    #[arg(long)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fixed demonstration values through the primality test
    Demo,
    /// Test the given values for primality
    Check {
        /// Values to test
        #[arg(required = true)]
        values: Vec<u64>,
        /// Emit one JSON object per value, with the evidence behind each verdict
        #[arg(long)]
        json: bool,
    },
    /// List the primes in an inclusive range
    Range {
        /// Start of scan range (inclusive)
        #[arg(long)]
        start: u64,
        /// End of scan range (inclusive)
        #[arg(long)]
        end: u64,
        /// Print only the number of primes found
        #[arg(long)]
        count_only: bool,
    },
    /// Draw random primes of a given bit length
    Generate {
        /// Bit length of each prime (2..=64)
        #[arg(long, default_value_t = 64)]
        bits: u32,
        /// How many primes to draw
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Generate a textbook RSA keypair and round-trip a message through it
    RsaDemo {
        /// Approximate modulus width in bits (32..=64)
        #[arg(long, default_value_t = 40)]
        bits: u32,
        /// Message to encrypt, must be below the modulus
        #[arg(long, default_value_t = 42)]
        message: u64,
    },
}

fn main() -> Result<()> {
    // Initialize structured logging: LOG_FORMAT=json for machine
    // consumption, human-readable otherwise. Logs go to stderr so stdout
    // stays clean for results.
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    cli::configure_rayon(cli.threads);

    match cli.command.as_ref().unwrap_or(&Commands::Demo) {
        Commands::Demo => cli::run_demo(),
        Commands::Check { values, json } => cli::run_check(values, *json),
        Commands::Range {
            start,
            end,
            count_only,
        } => cli::run_range(*start, *end, *count_only),
        Commands::Generate { bits, count } => cli::run_generate(*bits, *count),
        Commands::RsaDemo { bits, message } => cli::run_rsa_demo(*bits, *message),
    }
}
