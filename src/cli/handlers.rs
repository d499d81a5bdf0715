//! One-shot command handlers.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::Args;
use super::commands::{CliCommand, MemorableArgs, PinArgs, RandomArgs};
use super::session::Session;
use crate::config::AppConfig;
use crate::domain::{ExportFormat, PasswordExport, StrengthResult};
use crate::error::GeneratorError;
use crate::service::{
    AnyGenerator, FileVocabulary, MemorablePasswordGenerator, PasswordGenerator,
    PinCodeGenerator, RandomPasswordGenerator, VocabularySource, builtin_vocabulary, strength,
};

const BAR_WIDTH: usize = 20;

/// Run a one-shot command.
pub fn handle_command(command: &CliCommand, args: &Args, config: &AppConfig) -> anyhow::Result<()> {
    let generator = match command {
        CliCommand::Random(random) => random_generator(random, config)?,
        CliCommand::Memorable(memorable) => memorable_generator(memorable, config)?,
        CliCommand::Pin(pin) => pin_generator(pin, config)?,
        CliCommand::Score { password } => {
            print_strength(password, args.format)?;
            return Ok(());
        }
        CliCommand::Interactive => return Session::new(config).run(),
    };

    print_generated(generator, args)
}

fn random_generator(args: &RandomArgs, config: &AppConfig) -> anyhow::Result<AnyGenerator> {
    let settings = args.to_config(&config.random);
    let generator = match args.seed {
        Some(seed) => RandomPasswordGenerator::with_seed(settings, seed)?,
        None => RandomPasswordGenerator::new(settings)?,
    };
    Ok(AnyGenerator::Random(generator))
}

fn memorable_generator(args: &MemorableArgs, config: &AppConfig) -> anyhow::Result<AnyGenerator> {
    let vocabulary = load_vocabulary(args.wordlist(&config.memorable).map(PathBuf::as_path))?;
    let settings = args.to_config(&config.memorable, vocabulary);
    Ok(AnyGenerator::Memorable(MemorablePasswordGenerator::new(
        settings,
    )?))
}

fn pin_generator(args: &PinArgs, config: &AppConfig) -> anyhow::Result<AnyGenerator> {
    let settings = args.to_config(&config.pin);
    let generator = match args.seed {
        Some(seed) => PinCodeGenerator::with_seed(settings, seed)?,
        None => PinCodeGenerator::new(settings)?,
    };
    Ok(AnyGenerator::Pin(generator))
}

/// Load the word list at `path`, or the built-in list when no path is given.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Vec<String>, GeneratorError> {
    match path {
        Some(path) => FileVocabulary::new(path).load(),
        None => Ok(builtin_vocabulary()),
    }
}

fn print_generated(mut generator: AnyGenerator, args: &Args) -> anyhow::Result<()> {
    let kind = generator.kind();
    let mut exports = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let password = generator.generate()?;
        exports.push(PasswordExport::new(password, kind));
    }

    match args.format {
        ExportFormat::Json => {
            let json = if let [export] = exports.as_slice() {
                serde_json::to_string_pretty(export)
            } else {
                serde_json::to_string_pretty(&exports)
            }
            .context("Failed to serialize passwords")?;
            println!("{json}");
        }
        ExportFormat::Text => {
            for export in &exports {
                if args.strength {
                    println!("{}  {}", export.password, describe(&export.strength));
                } else {
                    println!("{}", export.password);
                }
            }
        }
    }

    Ok(())
}

fn print_strength(password: &str, format: ExportFormat) -> anyhow::Result<()> {
    let result = strength::score(password);
    match format {
        ExportFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize strength")?
        ),
        ExportFormat::Text => println!("{}", describe(&result)),
    }
    Ok(())
}

/// Short strength description, e.g. `Strong (78/100)`.
pub fn describe(result: &StrengthResult) -> String {
    format!("{} ({}/100)", result.label, result.score)
}

/// Fixed-width bar for a 0-100 score.
pub fn strength_bar(score: u8) -> String {
    let filled = usize::from(score.min(100)) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {score}/100",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}
