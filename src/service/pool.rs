//! Character pool construction for random passwords.

use crate::domain::CharacterClasses;
use crate::error::{GeneratorError, Result};

/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Decimal digits.
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation.
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
/// Characters dropped when similar characters are excluded.
pub const SIMILAR: &str = "Il1O0";

/// Characters eligible for random password sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Build the pool from the enabled classes.
    ///
    /// Classes are concatenated in the order uppercase, lowercase, digits,
    /// symbols. With `exclude_similar`, every character of [`SIMILAR`] is
    /// removed while the order of the rest is kept.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if the pool ends up empty.
    pub fn build(classes: &CharacterClasses, exclude_similar: bool) -> Result<Self> {
        let chars: Vec<char> = [
            (classes.upper, UPPERCASE),
            (classes.lower, LOWERCASE),
            (classes.digits, DIGITS),
            (classes.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, set)| set.chars())
        .filter(|c| !exclude_similar || !SIMILAR.contains(*c))
        .collect();

        if chars.is_empty() {
            return Err(GeneratorError::InvalidConfig(
                "no character types selected".to_string(),
            ));
        }

        Ok(Self { chars })
    }

    /// Number of characters in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the pool is empty. A built pool never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the pool contains `c`.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Pool characters in build order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl std::fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(upper: bool, lower: bool, digits: bool, symbols: bool) -> CharacterClasses {
        CharacterClasses {
            upper,
            lower,
            digits,
            symbols,
        }
    }

    #[test]
    fn test_no_classes_fails() {
        let err = CharacterPool::build(&CharacterClasses::NONE, false).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig(_)));
    }

    #[test]
    fn test_digits_only() {
        let pool = CharacterPool::build(&classes(false, false, true, false), false).unwrap();
        assert_eq!(pool.to_string(), "0123456789");
    }

    #[test]
    fn test_class_order() {
        let pool = CharacterPool::build(&classes(true, true, true, true), false).unwrap();
        assert_eq!(pool.len(), 26 + 26 + 10 + 32);
        assert_eq!(pool.as_slice()[0], 'A');
        assert_eq!(pool.as_slice()[26], 'a');
        assert_eq!(pool.as_slice()[52], '0');
        assert_eq!(pool.as_slice()[62], '!');
    }

    #[test]
    fn test_exclude_similar() {
        let plain = CharacterPool::build(&classes(true, false, true, false), false).unwrap();
        assert_eq!(plain.len(), 36);

        let filtered = CharacterPool::build(&classes(true, false, true, false), true).unwrap();
        assert_eq!(filtered.len(), 32);
        for c in ['I', 'O', '1', '0'] {
            assert!(!filtered.contains(c));
        }
        assert!(filtered.to_string().starts_with("ABCDEFGHJKLMNPQ"));
    }

    #[test]
    fn test_exclude_similar_lowercase() {
        let pool = CharacterPool::build(&classes(false, true, false, false), true).unwrap();
        assert_eq!(pool.len(), 25);
        assert!(!pool.contains('l'));
        assert!(pool.contains('i'));
        assert!(pool.contains('o'));
    }

    #[test]
    fn test_symbols_are_ascii_punctuation() {
        let pool = CharacterPool::build(&classes(false, false, false, true), false).unwrap();
        assert_eq!(pool.len(), 32);
        assert!(pool.as_slice().iter().all(char::is_ascii_punctuation));
    }
}
