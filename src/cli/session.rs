//! Interactive generator session driven by `inquire` prompts.

use std::fmt;
use std::path::PathBuf;

use inquire::validator::Validation;
use inquire::{Confirm, CustomType, InquireError, Select, Text};

use super::handlers::{load_vocabulary, strength_bar};
use crate::config::AppConfig;
use crate::domain::{
    CharacterClasses, ExportFormat, GeneratorSettings, History, HistoryEntry, MemorableConfig,
    PasswordExport, PasswordKind, PinConfig, RandomConfig, StrengthLabel,
};
use crate::error::GeneratorError;
use crate::service::{AnyGenerator, PasswordGenerator, builtin_vocabulary};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Generate(PasswordKind),
    History,
    Export,
    Quit,
}

impl MenuItem {
    fn options() -> Vec<Self> {
        PasswordKind::ALL
            .into_iter()
            .map(Self::Generate)
            .chain([Self::History, Self::Export, Self::Quit])
            .collect()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate(kind) => write!(f, "{kind}"),
            Self::History => write!(f, "Show password history"),
            Self::Export => write!(f, "Download current password"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextAction {
    Regenerate,
    Back,
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regenerate => write!(f, "Generate New Password"),
            Self::Back => write!(f, "Back to menu"),
        }
    }
}

/// Interactive generator session.
///
/// Generated passwords are kept in an in-memory history that is wiped when
/// the session ends.
pub struct Session<'a> {
    config: &'a AppConfig,
    vocabulary: Option<Vec<String>>,
    history: History,
    current: Option<PasswordExport>,
}

impl<'a> Session<'a> {
    /// Create a session using `config` for form defaults.
    pub const fn new(config: &'a AppConfig) -> Self {
        Self {
            config,
            vocabulary: None,
            history: History::new(),
            current: None,
        }
    }

    /// Run the menu loop until the user quits.
    pub fn run(mut self) -> anyhow::Result<()> {
        println!("╔══════════════════════════════════════╗");
        println!("║         ⚡ PASSWORD GENERATOR         ║");
        println!("╚══════════════════════════════════════╝");

        loop {
            let choice = match Select::new("Password Type", MenuItem::options()).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(e.into()),
            };

            let outcome = match choice {
                MenuItem::Generate(kind) => self.generate_flow(kind),
                MenuItem::History => {
                    self.show_history();
                    Ok(())
                }
                MenuItem::Export => self.export(),
                MenuItem::Quit => break,
            };

            match outcome {
                Err(e) if is_inquire_error(&e, &InquireError::OperationInterrupted) => break,
                Err(e) if is_inquire_error(&e, &InquireError::OperationCanceled) => {}
                other => other?,
            }
        }

        tracing::debug!(entries = self.history.len(), "Session closed, wiping history");
        self.history.clear();
        println!("👋 Generated passwords have been wiped from memory.");
        Ok(())
    }

    fn generate_flow(&mut self, kind: PasswordKind) -> anyhow::Result<()> {
        let settings = self.prompt_settings(kind)?;
        let mut generator = match AnyGenerator::from_settings(settings) {
            Ok(generator) => generator,
            Err(e) => {
                report(&e);
                return Ok(());
            }
        };

        loop {
            match generator.generate() {
                Ok(password) => self.record(password, kind),
                Err(e) => {
                    report(&e);
                    return Ok(());
                }
            }

            let next = Select::new(
                "What next?",
                vec![NextAction::Regenerate, NextAction::Back],
            )
            .prompt()?;
            if next == NextAction::Back {
                return Ok(());
            }
        }
    }

    fn record(&mut self, password: String, kind: PasswordKind) {
        let export = PasswordExport::new(password, kind);

        println!();
        println!("Your password is:");
        println!("    {}", export.password);
        println!(
            "{} {:<11} {}",
            label_marker(&export),
            export.strength.label.to_string(),
            strength_bar(export.strength.score)
        );
        println!();

        self.history.push(HistoryEntry::new(export.password.clone(), kind));
        self.current = Some(export);
    }

    fn prompt_settings(&mut self, kind: PasswordKind) -> anyhow::Result<GeneratorSettings> {
        Ok(match kind {
            PasswordKind::Random => GeneratorSettings::Random(self.prompt_random()?),
            PasswordKind::Memorable => GeneratorSettings::Memorable(self.prompt_memorable()?),
            PasswordKind::Pin => GeneratorSettings::Pin(self.prompt_pin()?),
        })
    }

    fn prompt_random(&self) -> anyhow::Result<RandomConfig> {
        let defaults = &self.config.random;

        let length = prompt_number("Length", defaults.length, 5, 50)?;
        println!("Character Types:");
        let classes = CharacterClasses {
            upper: Confirm::new("Uppercase (A-Z)?")
                .with_default(defaults.upper)
                .prompt()?,
            lower: Confirm::new("Lowercase (a-z)?")
                .with_default(defaults.lower)
                .prompt()?,
            digits: Confirm::new("Numbers (0-9)?")
                .with_default(defaults.digits)
                .prompt()?,
            symbols: Confirm::new("Symbols (!@#...)?")
                .with_default(defaults.symbols)
                .prompt()?,
        };
        let exclude_similar = Confirm::new("Exclude similar (O, 0, l, 1, I)?")
            .with_default(defaults.exclude_similar)
            .prompt()?;
        let no_repeat = Confirm::new("No repeated characters?")
            .with_default(defaults.no_repeat)
            .prompt()?;

        Ok(RandomConfig {
            length,
            classes,
            exclude_similar,
            no_repeat,
        })
    }

    fn prompt_memorable(&mut self) -> anyhow::Result<MemorableConfig> {
        let config = self.config;
        let defaults = &config.memorable;

        let word_count = prompt_number("Number of Words", defaults.word_count, 2, 10)?;
        let separator = Text::new("Separator")
            .with_default(&defaults.separator)
            .prompt()?;
        let capitalize = Confirm::new("Capitalize words?")
            .with_default(defaults.capitalize)
            .prompt()?;
        let suffix_length = prompt_number("Suffix length", defaults.suffix_length, 0, 6)?;

        let mut settings = defaults.to_config(self.vocabulary());
        settings.word_count = word_count;
        settings.separator = separator;
        settings.capitalize = capitalize;
        settings.suffix_length = suffix_length;
        Ok(settings)
    }

    fn prompt_pin(&self) -> anyhow::Result<PinConfig> {
        let mut config = self.config.pin.to_config();
        config.length = prompt_number("Length", config.length, 2, 50)?;
        Ok(config)
    }

    /// Load the word list once per session.
    fn vocabulary(&mut self) -> Vec<String> {
        let config = self.config;
        let wordlist = config.memorable.wordlist.as_deref();
        self.vocabulary
            .get_or_insert_with(|| {
                load_vocabulary(wordlist).unwrap_or_else(|e| {
                    report(&e);
                    tracing::warn!(error = %e, "Falling back to the built-in word list");
                    builtin_vocabulary()
                })
            })
            .clone()
    }

    fn show_history(&self) {
        if self.history.is_empty() {
            println!("⚠️ No password generated yet.");
            return;
        }

        for (index, entry) in self.history.entries().iter().enumerate() {
            println!(
                "{:>3}. {}  {:<18}  {}",
                index + 1,
                entry.generated_at.format("%H:%M:%S"),
                entry.kind.to_string(),
                entry.password
            );
        }
    }

    fn export(&self) -> anyhow::Result<()> {
        let Some(export) = &self.current else {
            println!("⚠️ No password generated yet.");
            return Ok(());
        };

        let format = Select::new("Download as", vec![ExportFormat::Text, ExportFormat::Json])
            .prompt()?;
        let path: PathBuf = Text::new("File name")
            .with_default(&format!("password.{}", format.extension()))
            .prompt()?
            .into();

        match export.write_to(&path, format) {
            Ok(()) => println!("✅ Saved to {}", path.display()),
            Err(e) => println!("❌ Could not write {}: {e}", path.display()),
        }
        Ok(())
    }
}

fn prompt_number(message: &str, default: usize, min: usize, max: usize) -> anyhow::Result<usize> {
    let value = CustomType::<usize>::new(message)
        .with_default(default.clamp(min, max))
        .with_error_message("Please type a whole number")
        .with_help_message(&format!("{min} to {max}"))
        .with_validator(move |value: &usize| {
            Ok(if (min..=max).contains(value) {
                Validation::Valid
            } else {
                Validation::Invalid(format!("Value must be between {min} and {max}").into())
            })
        })
        .prompt()?;
    Ok(value)
}

const fn label_marker(export: &PasswordExport) -> &'static str {
    match export.strength.label {
        StrengthLabel::Weak => "🔴",
        StrengthLabel::Medium => "🟠",
        StrengthLabel::Strong => "🟡",
        StrengthLabel::VeryStrong => "🟢",
    }
}

fn report(error: &GeneratorError) {
    tracing::debug!(code = %error.error_code(), "Generation failed");
    println!("❌ {error}");
}

fn is_inquire_error(error: &anyhow::Error, expected: &InquireError) -> bool {
    error
        .downcast_ref::<InquireError>()
        .is_some_and(|e| std::mem::discriminant(e) == std::mem::discriminant(expected))
}
