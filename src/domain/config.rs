//! Generator configuration types.
//!
//! These types represent the parameters for the different password
//! generation strategies. Each one is validated before a generator is built.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

/// Kind of password produced by a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PasswordKind {
    /// Random character string.
    #[serde(rename = "Random Password")]
    Random,
    /// Word-based passphrase.
    #[serde(rename = "Memorable Password")]
    Memorable,
    /// Numeric PIN code.
    #[serde(rename = "Pin Code")]
    Pin,
}

impl PasswordKind {
    /// All kinds, in menu order.
    pub const ALL: [Self; 3] = [Self::Random, Self::Memorable, Self::Pin];
}

impl std::fmt::Display for PasswordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "Random Password"),
            Self::Memorable => write!(f, "Memorable Password"),
            Self::Pin => write!(f, "Pin Code"),
        }
    }
}

/// Trait for generator configuration types.
pub trait GeneratorConfig: Clone {
    /// Get the password kind this configuration produces.
    fn kind() -> PasswordKind;

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if the configuration is invalid.
    fn validate(&self) -> Result<()>;
}

/// Character classes enabled for random passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClasses {
    /// Uppercase ASCII letters.
    pub upper: bool,
    /// Lowercase ASCII letters.
    pub lower: bool,
    /// Decimal digits.
    pub digits: bool,
    /// ASCII punctuation.
    pub symbols: bool,
}

impl CharacterClasses {
    /// No class enabled.
    pub const NONE: Self = Self {
        upper: false,
        lower: false,
        digits: false,
        symbols: false,
    };

    /// Check whether at least one class is enabled.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.upper || self.lower || self.digits || self.symbols
    }
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
            symbols: false,
        }
    }
}

/// Configuration for random character passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Number of characters to generate.
    pub length: usize,

    /// Enabled character classes.
    #[serde(flatten)]
    pub classes: CharacterClasses,

    /// Remove visually similar characters (`I`, `l`, `1`, `O`, `0`).
    #[serde(default)]
    pub exclude_similar: bool,

    /// Draw every character at most once.
    #[serde(default)]
    pub no_repeat: bool,
}

impl GeneratorConfig for RandomConfig {
    fn kind() -> PasswordKind {
        PasswordKind::Random
    }

    fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(GeneratorError::InvalidConfig(
                "length must be at least 1".to_string(),
            ));
        }
        if !self.classes.any() {
            return Err(GeneratorError::InvalidConfig(
                "at least one character type must be selected".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            length: 12,
            classes: CharacterClasses::default(),
            exclude_similar: false,
            no_repeat: false,
        }
    }
}

/// How words are drawn for a memorable password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordSampling {
    /// Every word appears at most once in a phrase.
    #[default]
    Distinct,
    /// Words are drawn independently and may repeat.
    WithReplacement,
}

/// Configuration for memorable (word-based) passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorableConfig {
    /// Number of words in the phrase.
    pub word_count: usize,

    /// Text placed between words.
    pub separator: String,

    /// Capitalize each word instead of lowercasing it.
    pub capitalize: bool,

    /// Number of random digits appended after the phrase.
    pub suffix_length: usize,

    /// Candidate words.
    pub vocabulary: Vec<String>,

    /// Word sampling policy.
    pub sampling: WordSampling,

    /// Seed for reproducible output.
    pub seed: Option<u64>,
}

impl MemorableConfig {
    /// Create a configuration with the default form settings over `vocabulary`.
    #[must_use]
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            capitalize: true,
            suffix_length: 0,
            vocabulary,
            sampling: WordSampling::Distinct,
            seed: None,
        }
    }
}

impl GeneratorConfig for MemorableConfig {
    fn kind() -> PasswordKind {
        PasswordKind::Memorable
    }

    fn validate(&self) -> Result<()> {
        if self.word_count == 0 {
            return Err(GeneratorError::InvalidConfig(
                "word count must be at least 1".to_string(),
            ));
        }
        if self.vocabulary.is_empty() {
            return Err(GeneratorError::InvalidConfig(
                "vocabulary cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Codes rejected by default for 4-digit PINs.
pub const DEFAULT_BLOCKED_PINS: [&str; 4] = ["1234", "0000", "1111", "2580"];

/// Configuration for numeric PIN codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinConfig {
    /// Number of digits.
    pub length: usize,

    /// Codes that are never returned. Matching is exact, so an entry only
    /// affects PINs of its own length.
    #[serde(default = "default_blocked")]
    pub blocked: BTreeSet<String>,
}

fn default_blocked() -> BTreeSet<String> {
    DEFAULT_BLOCKED_PINS.iter().map(ToString::to_string).collect()
}

impl PinConfig {
    /// Create a configuration with the default blocklist.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            blocked: default_blocked(),
        }
    }
}

impl GeneratorConfig for PinConfig {
    fn kind() -> PasswordKind {
        PasswordKind::Pin
    }

    fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(GeneratorError::InvalidConfig(
                "PIN length must be at least 1".to_string(),
            ));
        }
        if let Some(code) = self
            .blocked
            .iter()
            .find(|code| code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(GeneratorError::InvalidConfig(format!(
                "blocked PIN must contain only digits: {code:?}"
            )));
        }
        Ok(())
    }
}

impl Default for PinConfig {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Configuration for any generator, selected at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorSettings {
    /// Random character password.
    Random(RandomConfig),
    /// Memorable passphrase.
    Memorable(MemorableConfig),
    /// Numeric PIN.
    Pin(PinConfig),
}

impl GeneratorSettings {
    /// Get the password kind these settings produce.
    #[must_use]
    pub const fn kind(&self) -> PasswordKind {
        match self {
            Self::Random(_) => PasswordKind::Random,
            Self::Memorable(_) => PasswordKind::Memorable,
            Self::Pin(_) => PasswordKind::Pin,
        }
    }
}
