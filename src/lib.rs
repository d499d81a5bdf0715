//! # Passcraft
//!
//! Password generation with strength scoring, supporting three generator kinds:
//!
//! - **Random passwords**: Characters drawn from a configurable pool, optionally without repeats
//! - **Memorable passwords**: Words from a vocabulary joined by a separator, e.g. `Apple-River-Kite`
//! - **PIN codes**: Numeric codes that skip repeating, sequential and common choices
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                              Passcraft                               │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  │
//! │  │  CLI Layer  │  │   Service   │  │  Strength   │  │   Domain    │  │
//! │  │  (clap)     │→ │   Layer     │→ │   Scorer    │  │   Models    │  │
//! │  └─────────────┘  └─────────────┘  └─────────────┘  └─────────────┘  │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use clap::Parser;
use tracing::info;

use crate::cli::Args;
use crate::config::AppConfig;

/// Run the Passcraft command line.
///
/// This function:
/// 1. Parses the command line
/// 2. Loads configuration from files and environment
/// 3. Initializes logging on stderr
/// 4. Runs the requested command, or the interactive generator
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - Password generation fails
/// - The terminal cannot be driven
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::load()?;

    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        interactive = args.command.is_none(),
        "Starting Passcraft"
    );

    cli::execute(&args, &config)
}

/// Initialize logging based on configuration.
///
/// Logs go to stderr so generated passwords stay alone on stdout.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
