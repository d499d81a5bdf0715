//! Default generator settings.
//!
//! These fill in every option the command line leaves unset.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{CharacterClasses, MemorableConfig, PinConfig, RandomConfig, WordSampling};

/// Defaults for random passwords.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomDefaults {
    /// Password length.
    #[serde(default = "default_random_length")]
    pub length: usize,

    /// Include uppercase letters.
    #[serde(default = "default_true")]
    pub upper: bool,

    /// Include lowercase letters.
    #[serde(default = "default_true")]
    pub lower: bool,

    /// Include digits.
    #[serde(default = "default_true")]
    pub digits: bool,

    /// Include symbols.
    #[serde(default)]
    pub symbols: bool,

    /// Drop `I`, `l`, `1`, `O`, `0`.
    #[serde(default)]
    pub exclude_similar: bool,

    /// Never repeat a character.
    #[serde(default)]
    pub no_repeat: bool,
}

const fn default_random_length() -> usize {
    12
}

const fn default_true() -> bool {
    true
}

impl RandomDefaults {
    /// Build a generator configuration from these defaults.
    #[must_use]
    pub const fn to_config(&self) -> RandomConfig {
        RandomConfig {
            length: self.length,
            classes: CharacterClasses {
                upper: self.upper,
                lower: self.lower,
                digits: self.digits,
                symbols: self.symbols,
            },
            exclude_similar: self.exclude_similar,
            no_repeat: self.no_repeat,
        }
    }
}

impl Default for RandomDefaults {
    fn default() -> Self {
        Self {
            length: default_random_length(),
            upper: true,
            lower: true,
            digits: true,
            symbols: false,
            exclude_similar: false,
            no_repeat: false,
        }
    }
}

/// Defaults for memorable passwords.
#[derive(Debug, Clone, Deserialize)]
pub struct MemorableDefaults {
    /// Number of words.
    #[serde(default = "default_word_count")]
    pub word_count: usize,

    /// Separator between words.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Capitalize each word.
    #[serde(default = "default_true")]
    pub capitalize: bool,

    /// Number of trailing digits.
    #[serde(default)]
    pub suffix_length: usize,

    /// Word list file; the built-in list is used when unset.
    #[serde(default)]
    pub wordlist: Option<PathBuf>,

    /// Word sampling policy.
    #[serde(default)]
    pub sampling: WordSampling,
}

const fn default_word_count() -> usize {
    4
}

fn default_separator() -> String {
    "-".to_string()
}

impl MemorableDefaults {
    /// Build a generator configuration over `vocabulary`.
    #[must_use]
    pub fn to_config(&self, vocabulary: Vec<String>) -> MemorableConfig {
        MemorableConfig {
            word_count: self.word_count,
            separator: self.separator.clone(),
            capitalize: self.capitalize,
            suffix_length: self.suffix_length,
            vocabulary,
            sampling: self.sampling,
            seed: None,
        }
    }
}

impl Default for MemorableDefaults {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            separator: default_separator(),
            capitalize: true,
            suffix_length: 0,
            wordlist: None,
            sampling: WordSampling::Distinct,
        }
    }
}

/// Defaults for PIN codes.
#[derive(Debug, Clone, Deserialize)]
pub struct PinDefaults {
    /// Number of digits.
    #[serde(default = "default_pin_length")]
    pub length: usize,

    /// Codes never returned.
    #[serde(default = "default_blocked")]
    pub blocked: BTreeSet<String>,
}

const fn default_pin_length() -> usize {
    4
}

fn default_blocked() -> BTreeSet<String> {
    PinConfig::default().blocked
}

impl PinDefaults {
    /// Build a generator configuration from these defaults.
    #[must_use]
    pub fn to_config(&self) -> PinConfig {
        PinConfig {
            length: self.length,
            blocked: self.blocked.clone(),
        }
    }
}

impl Default for PinDefaults {
    fn default() -> Self {
        Self {
            length: default_pin_length(),
            blocked: default_blocked(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_defaults_match_form() {
        let config = RandomDefaults::default().to_config();
        assert_eq!(config.length, 12);
        assert!(config.classes.upper && config.classes.lower && config.classes.digits);
        assert!(!config.classes.symbols);
    }

    #[test]
    fn test_memorable_defaults() {
        let config = MemorableDefaults::default().to_config(vec!["apple".to_string()]);
        assert_eq!(config.word_count, 4);
        assert_eq!(config.separator, "-");
        assert!(config.capitalize);
        assert_eq!(config.sampling, WordSampling::Distinct);
    }

    #[test]
    fn test_pin_defaults() {
        let config = PinDefaults::default().to_config();
        assert_eq!(config, PinConfig::default());
    }
}
