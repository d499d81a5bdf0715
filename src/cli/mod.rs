//! Command line interface.
//!
//! One-shot subcommands print passwords to stdout; without a subcommand the
//! interactive generator starts.

use clap::Parser;
use clap::builder::RangedU64ValueParser;

pub mod commands;
pub mod handlers;
pub mod session;

pub use commands::CliCommand;

use crate::config::AppConfig;
use crate::domain::ExportFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = ExportFormat::Text)]
    pub format: ExportFormat,

    /// Number of passwords to generate
    #[arg(long, short = 'n', global = true, default_value_t = 1, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub count: usize,

    /// Print the strength next to each password
    #[arg(long, global = true)]
    pub strength: bool,

    /// Command to execute; the interactive generator starts when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Dispatch the parsed command line.
///
/// # Errors
///
/// Returns an error if generation fails or the terminal cannot be driven.
pub fn execute(args: &Args, config: &AppConfig) -> anyhow::Result<()> {
    match &args.command {
        Some(command) => handlers::handle_command(command, args, config),
        None => session::Session::new(config).run(),
    }
}
