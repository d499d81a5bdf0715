//! Service layer module.
//!
//! Contains the password generators, the strength scorer and the
//! vocabulary sources.

pub mod memorable;
pub mod pin;
pub mod pool;
pub mod random;
pub mod strength;
pub mod vocabulary;

pub use memorable::MemorablePasswordGenerator;
pub use pin::PinCodeGenerator;
pub use pool::CharacterPool;
pub use random::RandomPasswordGenerator;
pub use vocabulary::{FileVocabulary, StaticVocabulary, VocabularySource, builtin_vocabulary};

use crate::domain::{GeneratorSettings, PasswordKind};
use crate::error::Result;

/// A source of passwords.
pub trait PasswordGenerator {
    /// Kind of password produced.
    fn kind(&self) -> PasswordKind;

    /// Produce one password.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration cannot produce a password.
    fn generate(&mut self) -> Result<String>;
}

/// Generator of any kind, chosen at runtime.
#[derive(Debug)]
pub enum AnyGenerator {
    /// Random character passwords.
    Random(RandomPasswordGenerator),
    /// Memorable passphrases.
    Memorable(MemorablePasswordGenerator),
    /// PIN codes.
    Pin(PinCodeGenerator),
}

impl AnyGenerator {
    /// Build the generator matching `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn from_settings(settings: GeneratorSettings) -> Result<Self> {
        Ok(match settings {
            GeneratorSettings::Random(config) => Self::Random(RandomPasswordGenerator::new(config)?),
            GeneratorSettings::Memorable(config) => {
                Self::Memorable(MemorablePasswordGenerator::new(config)?)
            }
            GeneratorSettings::Pin(config) => Self::Pin(PinCodeGenerator::new(config)?),
        })
    }
}

impl PasswordGenerator for AnyGenerator {
    fn kind(&self) -> PasswordKind {
        match self {
            Self::Random(generator) => generator.kind(),
            Self::Memorable(generator) => generator.kind(),
            Self::Pin(generator) => generator.kind(),
        }
    }

    fn generate(&mut self) -> Result<String> {
        match self {
            Self::Random(generator) => generator.generate(),
            Self::Memorable(generator) => generator.generate(),
            Self::Pin(generator) => generator.generate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MemorableConfig, PinConfig, RandomConfig};

    #[test]
    fn test_any_generator_dispatch() {
        let settings = [
            GeneratorSettings::Random(RandomConfig::default()),
            GeneratorSettings::Memorable(MemorableConfig::new(builtin_vocabulary())),
            GeneratorSettings::Pin(PinConfig::default()),
        ];

        for settings in settings {
            let kind = settings.kind();
            let mut generator = AnyGenerator::from_settings(settings).unwrap();
            assert_eq!(generator.kind(), kind);
            assert!(!generator.generate().unwrap().is_empty());
        }
    }

    #[test]
    fn test_any_generator_rejects_invalid() {
        let settings = GeneratorSettings::Pin(PinConfig::new(0));
        assert!(AnyGenerator::from_settings(settings).is_err());
    }
}
