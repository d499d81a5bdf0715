//! Subcommands and their flags.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::{MemorableDefaults, PinDefaults, RandomDefaults};
use crate::domain::{MemorableConfig, PinConfig, RandomConfig, WordSampling};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate random character passwords
    Random(RandomArgs),

    /// Generate memorable word-based passwords
    Memorable(MemorableArgs),

    /// Generate numeric PIN codes
    Pin(PinArgs),

    /// Score the strength of a password
    Score {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },

    /// Start the interactive generator
    Interactive,
}

#[derive(Args, Debug, Default)]
pub struct RandomArgs {
    /// Password length
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Include symbols
    #[arg(long, conflicts_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude similar characters (O, 0, l, 1, I)
    #[arg(long)]
    pub exclude_similar: bool,

    /// Never repeat a character
    #[arg(long)]
    pub no_repeat: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RandomArgs {
    /// Apply the flags on top of the configured defaults.
    pub fn to_config(&self, defaults: &RandomDefaults) -> RandomConfig {
        let mut config = defaults.to_config();
        if let Some(length) = self.length {
            config.length = length;
        }
        config.classes.upper &= !self.no_upper;
        config.classes.lower &= !self.no_lower;
        config.classes.digits &= !self.no_digits;
        config.classes.symbols = (config.classes.symbols || self.symbols) && !self.no_symbols;
        config.exclude_similar |= self.exclude_similar;
        config.no_repeat |= self.no_repeat;
        config
    }
}

#[derive(Args, Debug, Default)]
pub struct MemorableArgs {
    /// Number of words
    #[arg(long, short)]
    pub words: Option<usize>,

    /// Separator between words
    #[arg(long, short)]
    pub separator: Option<String>,

    /// Lowercase every word instead of capitalizing
    #[arg(long)]
    pub no_capitalize: bool,

    /// Number of digits appended to the phrase
    #[arg(long)]
    pub suffix: Option<usize>,

    /// Word list file, one word per line
    #[arg(long, env = "PASSCRAFT_WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// Allow the same word more than once
    #[arg(long)]
    pub allow_repeats: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl MemorableArgs {
    /// Apply the flags on top of the configured defaults.
    pub fn to_config(&self, defaults: &MemorableDefaults, vocabulary: Vec<String>) -> MemorableConfig {
        let mut config = defaults.to_config(vocabulary);
        if let Some(words) = self.words {
            config.word_count = words;
        }
        if let Some(separator) = &self.separator {
            config.separator.clone_from(separator);
        }
        config.capitalize &= !self.no_capitalize;
        if let Some(suffix) = self.suffix {
            config.suffix_length = suffix;
        }
        if self.allow_repeats {
            config.sampling = WordSampling::WithReplacement;
        }
        config.seed = self.seed;
        config
    }

    /// Word list to load, preferring the command line over the config file.
    pub fn wordlist<'a>(&'a self, defaults: &'a MemorableDefaults) -> Option<&'a PathBuf> {
        self.wordlist.as_ref().or(defaults.wordlist.as_ref())
    }
}

#[derive(Args, Debug, Default)]
pub struct PinArgs {
    /// Number of digits
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PinArgs {
    /// Apply the flags on top of the configured defaults.
    pub fn to_config(&self, defaults: &PinDefaults) -> PinConfig {
        let mut config = defaults.to_config();
        if let Some(length) = self.length {
            config.length = length;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_flags_override_defaults() {
        let args = RandomArgs {
            length: Some(30),
            no_digits: true,
            symbols: true,
            no_repeat: true,
            ..Default::default()
        };
        let config = args.to_config(&RandomDefaults::default());
        assert_eq!(config.length, 30);
        assert!(config.classes.upper);
        assert!(!config.classes.digits);
        assert!(config.classes.symbols);
        assert!(config.no_repeat);
        assert!(!config.exclude_similar);
    }

    #[test]
    fn test_memorable_flags_override_defaults() {
        let args = MemorableArgs {
            words: Some(6),
            separator: Some(".".to_string()),
            no_capitalize: true,
            suffix: Some(3),
            allow_repeats: true,
            seed: Some(9),
            ..Default::default()
        };
        let config = args.to_config(&MemorableDefaults::default(), vec!["apple".to_string()]);
        assert_eq!(config.word_count, 6);
        assert_eq!(config.separator, ".");
        assert!(!config.capitalize);
        assert_eq!(config.suffix_length, 3);
        assert_eq!(config.sampling, WordSampling::WithReplacement);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_wordlist_precedence() {
        let defaults = MemorableDefaults {
            wordlist: Some(PathBuf::from("config.txt")),
            ..Default::default()
        };
        let args = MemorableArgs::default();
        assert_eq!(args.wordlist(&defaults), Some(&PathBuf::from("config.txt")));

        let args = MemorableArgs {
            wordlist: Some(PathBuf::from("cli.txt")),
            ..Default::default()
        };
        assert_eq!(args.wordlist(&defaults), Some(&PathBuf::from("cli.txt")));
    }

    #[test]
    fn test_pin_length_override() {
        let config = PinArgs {
            length: Some(8),
            seed: None,
        }
        .to_config(&PinDefaults::default());
        assert_eq!(config.length, 8);
        assert!(config.blocked.contains("0000"));
    }
}
