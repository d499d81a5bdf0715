//! Random character password service.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::{GeneratorConfig, PasswordKind, RandomConfig};
use crate::error::{GeneratorError, Result};
use crate::service::PasswordGenerator;
use crate::service::pool::CharacterPool;

/// Generator for random character passwords.
#[derive(Debug)]
pub struct RandomPasswordGenerator {
    config: RandomConfig,
    pool: CharacterPool,
    rng: StdRng,
}

impl RandomPasswordGenerator {
    /// Create a generator seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if the configuration is
    /// invalid or yields an empty pool.
    pub fn new(config: RandomConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a generator with a fixed seed.
    ///
    /// # Errors
    ///
    /// Same as [`RandomPasswordGenerator::new`].
    pub fn with_seed(config: RandomConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: RandomConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let pool = CharacterPool::build(&config.classes, config.exclude_similar)?;
        Ok(Self { config, pool, rng })
    }

    /// Character pool used by this generator.
    #[must_use]
    pub const fn pool(&self) -> &CharacterPool {
        &self.pool
    }

    /// Configuration used by this generator.
    #[must_use]
    pub const fn config(&self) -> &RandomConfig {
        &self.config
    }

    fn generate_unique(&mut self) -> Result<String> {
        let length = self.config.length;
        if length > self.pool.len() {
            return Err(GeneratorError::InsufficientPool {
                requested: length,
                available: self.pool.len(),
            });
        }

        let mut chars = self.pool.as_slice().to_vec();
        let (picked, _) = chars.partial_shuffle(&mut self.rng, length);
        Ok(picked.iter().collect())
    }

    fn generate_with_repeats(&mut self) -> String {
        let chars = self.pool.as_slice();
        (0..self.config.length)
            .map(|_| chars[self.rng.random_range(0..chars.len())])
            .collect()
    }
}

impl PasswordGenerator for RandomPasswordGenerator {
    fn kind(&self) -> PasswordKind {
        RandomConfig::kind()
    }

    fn generate(&mut self) -> Result<String> {
        let password = if self.config.no_repeat {
            self.generate_unique()?
        } else {
            self.generate_with_repeats()
        };

        tracing::debug!(
            length = self.config.length,
            pool = self.pool.len(),
            no_repeat = self.config.no_repeat,
            "Generated random password"
        );
        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::CharacterClasses;

    fn config(length: usize, no_repeat: bool) -> RandomConfig {
        RandomConfig {
            length,
            no_repeat,
            ..Default::default()
        }
    }

    #[test]
    fn test_length_and_pool_membership() {
        let mut generator = RandomPasswordGenerator::new(config(24, false)).unwrap();
        for _ in 0..200 {
            let password = generator.generate().unwrap();
            assert_eq!(password.chars().count(), 24);
            assert!(password.chars().all(|c| generator.pool().contains(c)));
        }
    }

    #[test]
    fn test_repeats_allowed_beyond_pool_size() {
        let digits = RandomConfig {
            length: 50,
            classes: CharacterClasses {
                upper: false,
                lower: false,
                digits: true,
                symbols: false,
            },
            ..Default::default()
        };
        let mut generator = RandomPasswordGenerator::new(digits).unwrap();
        let password = generator.generate().unwrap();
        assert_eq!(password.len(), 50);
        assert!(password.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_no_repeat_yields_distinct_characters() {
        let mut generator = RandomPasswordGenerator::new(config(40, true)).unwrap();
        for _ in 0..200 {
            let password = generator.generate().unwrap();
            let unique: HashSet<char> = password.chars().collect();
            assert_eq!(unique.len(), 40);
        }
    }

    #[test]
    fn test_no_repeat_full_pool_is_permutation() {
        let mut generator = RandomPasswordGenerator::new(config(62, true)).unwrap();
        let password = generator.generate().unwrap();
        let mut sorted: Vec<char> = password.chars().collect();
        sorted.sort_unstable();
        let mut pool = generator.pool().as_slice().to_vec();
        pool.sort_unstable();
        assert_eq!(sorted, pool);
    }

    #[test]
    fn test_no_repeat_insufficient_pool() {
        let mut generator = RandomPasswordGenerator::new(config(63, true)).unwrap();
        let err = generator.generate().unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InsufficientPool {
                requested: 63,
                available: 62
            }
        ));
    }

    #[test]
    fn test_exclude_similar_never_emits_similar() {
        let mut cfg = config(64, false);
        cfg.exclude_similar = true;
        let mut generator = RandomPasswordGenerator::new(cfg).unwrap();
        for _ in 0..100 {
            let password = generator.generate().unwrap();
            assert!(!password.contains(['I', 'l', '1', 'O', '0']));
        }
    }

    #[test]
    fn test_no_classes_rejected() {
        let cfg = RandomConfig {
            classes: CharacterClasses::NONE,
            ..Default::default()
        };
        let err = RandomPasswordGenerator::new(cfg).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig(_)));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomPasswordGenerator::with_seed(config(16, false), 7).unwrap();
        let mut b = RandomPasswordGenerator::with_seed(config(16, false), 7).unwrap();
        assert_eq!(a.generate().unwrap(), b.generate().unwrap());
        assert_eq!(a.kind(), PasswordKind::Random);
    }
}
