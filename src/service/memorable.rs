//! Memorable passphrase service.
//!
//! Phrases are built from words of 4 to 7 characters taken from the
//! configured vocabulary. When no word fits that range the whole vocabulary
//! is used instead.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::{GeneratorConfig, MemorableConfig, PasswordKind, WordSampling};
use crate::error::{GeneratorError, Result};
use crate::service::PasswordGenerator;

/// Shortest word kept by the length filter.
pub const MIN_WORD_LEN: usize = 4;
/// Longest word kept by the length filter.
pub const MAX_WORD_LEN: usize = 7;

/// Generator for word-based passphrases.
#[derive(Debug)]
pub struct MemorablePasswordGenerator {
    config: MemorableConfig,
    words: Vec<String>,
    rng: StdRng,
}

impl MemorablePasswordGenerator {
    /// Create a generator.
    ///
    /// Uses `config.seed` when present so that the sequence of phrases is
    /// reproducible, otherwise seeds from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: MemorableConfig) -> Result<Self> {
        config.validate()?;

        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let words = filter_vocabulary(&config.vocabulary);

        Ok(Self { config, words, rng })
    }

    /// Words eligible for sampling after length filtering.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick word indices according to the sampling policy.
    fn sample_indices(&mut self) -> Result<Vec<usize>> {
        let count = self.config.word_count;
        let available = self.words.len();
        match self.config.sampling {
            WordSampling::Distinct => {
                if count > available {
                    return Err(GeneratorError::InsufficientVocabulary {
                        requested: count,
                        available,
                    });
                }
                let mut indices: Vec<usize> = (0..available).collect();
                let (picked, _) = indices.partial_shuffle(&mut self.rng, count);
                Ok(picked.to_vec())
            }
            WordSampling::WithReplacement => Ok((0..count)
                .map(|_| self.rng.random_range(0..available))
                .collect()),
        }
    }
}

impl PasswordGenerator for MemorablePasswordGenerator {
    fn kind(&self) -> PasswordKind {
        MemorableConfig::kind()
    }

    fn generate(&mut self) -> Result<String> {
        let words: Vec<String> = self
            .sample_indices()?
            .into_iter()
            .map(|i| {
                let word = &self.words[i];
                if self.config.capitalize {
                    capitalize_word(word)
                } else {
                    word.to_lowercase()
                }
            })
            .collect();

        let mut password = words.join(&self.config.separator);
        for _ in 0..self.config.suffix_length {
            let digit = self.rng.random_range(0..10u8);
            password.push(char::from(b'0' + digit));
        }

        tracing::debug!(
            words = self.config.word_count,
            suffix = self.config.suffix_length,
            sampling = ?self.config.sampling,
            "Generated memorable password"
        );
        Ok(password)
    }
}

/// Keep words of 4 to 7 characters, falling back to the full vocabulary.
fn filter_vocabulary(vocabulary: &[String]) -> Vec<String> {
    let filtered: Vec<String> = vocabulary
        .iter()
        .filter(|word| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.chars().count()))
        .cloned()
        .collect();

    if filtered.is_empty() {
        tracing::warn!(
            size = vocabulary.len(),
            "No vocabulary word has 4 to 7 characters, using the unfiltered list"
        );
        vocabulary.to_vec()
    } else {
        filtered
    }
}

/// Uppercase the first letter and lowercase the rest.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use regex::Regex;

    use super::*;

    fn vocabulary(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn fruit_config() -> MemorableConfig {
        MemorableConfig {
            word_count: 4,
            separator: "-".to_string(),
            capitalize: true,
            suffix_length: 2,
            vocabulary: vocabulary(&["apple", "banana", "kiwi"]),
            sampling: WordSampling::WithReplacement,
            seed: None,
        }
    }

    #[test]
    fn test_filter_keeps_four_to_seven() {
        let words = filter_vocabulary(&vocabulary(&["cat", "kiwi", "lettuce", "zucchini", "apple"]));
        assert_eq!(words, vocabulary(&["kiwi", "lettuce", "apple"]));
    }

    #[test]
    fn test_filter_falls_back_to_full_list() {
        let words = filter_vocabulary(&vocabulary(&["ox", "cat", "watermelon"]));
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_filter_counts_characters() {
        let words = filter_vocabulary(&vocabulary(&["café", "ab"]));
        assert_eq!(words, vocabulary(&["café"]));
    }

    #[test]
    fn test_capitalize_word() {
        assert_eq!(capitalize_word("apple"), "Apple");
        assert_eq!(capitalize_word("bANANA"), "Banana");
        assert_eq!(capitalize_word("éclair"), "Éclair");
        assert_eq!(capitalize_word(""), "");
    }

    #[test]
    fn test_pattern_with_replacement() {
        let re = Regex::new(r"^(Apple|Banana|Kiwi)(-(Apple|Banana|Kiwi)){3}\d{2}$").unwrap();
        let mut generator = MemorablePasswordGenerator::new(fruit_config()).unwrap();
        for _ in 0..100 {
            let password = generator.generate().unwrap();
            assert!(re.is_match(&password), "unexpected password {password}");
        }
    }

    #[test]
    fn test_distinct_needs_enough_words() {
        let config = MemorableConfig {
            sampling: WordSampling::Distinct,
            ..fruit_config()
        };
        let mut generator = MemorablePasswordGenerator::new(config).unwrap();
        let err = generator.generate().unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InsufficientVocabulary {
                requested: 4,
                available: 3
            }
        ));
    }

    #[test]
    fn test_distinct_words_never_repeat() {
        let config = MemorableConfig {
            word_count: 3,
            separator: " ".to_string(),
            suffix_length: 0,
            sampling: WordSampling::Distinct,
            ..fruit_config()
        };
        let mut generator = MemorablePasswordGenerator::new(config).unwrap();
        for _ in 0..100 {
            let password = generator.generate().unwrap();
            let words: HashSet<&str> = password.split(' ').collect();
            assert_eq!(words.len(), 3);
        }
    }

    #[test]
    fn test_lowercase_without_capitalize() {
        let config = MemorableConfig {
            word_count: 2,
            separator: "_".to_string(),
            capitalize: false,
            suffix_length: 0,
            vocabulary: vocabulary(&["Apple", "KIWI"]),
            sampling: WordSampling::Distinct,
            seed: Some(1),
        };
        let mut generator = MemorablePasswordGenerator::new(config).unwrap();
        let password = generator.generate().unwrap();
        assert!(password == "apple_kiwi" || password == "kiwi_apple");
    }

    #[test]
    fn test_empty_separator_and_no_suffix() {
        let config = MemorableConfig {
            word_count: 1,
            separator: String::new(),
            suffix_length: 0,
            ..fruit_config()
        };
        let mut generator = MemorablePasswordGenerator::new(config).unwrap();
        let password = generator.generate().unwrap();
        assert!(["Apple", "Banana", "Kiwi"].contains(&password.as_str()));
    }

    #[test]
    fn test_seed_is_deterministic() {
        let config = MemorableConfig {
            seed: Some(42),
            ..fruit_config()
        };
        let mut a = MemorablePasswordGenerator::new(config.clone()).unwrap();
        let mut b = MemorablePasswordGenerator::new(config).unwrap();
        for _ in 0..5 {
            assert_eq!(a.generate().unwrap(), b.generate().unwrap());
        }
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let config = MemorableConfig::new(Vec::new());
        assert!(matches!(
            MemorablePasswordGenerator::new(config),
            Err(GeneratorError::InvalidConfig(_))
        ));
    }
}
