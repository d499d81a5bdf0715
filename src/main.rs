//! Passcraft entry point.
//!
//! Parses the command line, loads configuration and either runs a one-shot
//! command or starts the interactive generator.

use passcraft::run;

fn main() -> anyhow::Result<()> {
    run()
}
