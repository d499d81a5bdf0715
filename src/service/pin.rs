//! PIN code service.
//!
//! Candidates are drawn uniformly and rejected when they are blocked, made
//! of a single repeated digit, or a run ascending or descending by one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{GeneratorConfig, PasswordKind, PinConfig};
use crate::error::{GeneratorError, Result};
use crate::service::PasswordGenerator;

/// Maximum number of candidates drawn per call.
pub const MAX_ATTEMPTS: usize = 1000;

/// Generator for numeric PIN codes.
#[derive(Debug)]
pub struct PinCodeGenerator {
    config: PinConfig,
    rng: StdRng,
}

impl PinCodeGenerator {
    /// Create a generator seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: PinConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a generator with a fixed seed.
    ///
    /// # Errors
    ///
    /// Same as [`PinCodeGenerator::new`].
    pub fn with_seed(config: PinConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PinConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Check a candidate against every rejection rule.
    #[must_use]
    pub fn is_acceptable(&self, pin: &str) -> bool {
        !self.config.blocked.contains(pin) && !is_repeating(pin) && !is_sequential(pin)
    }

    fn draw(&mut self) -> String {
        (0..self.config.length)
            .map(|_| char::from(b'0' + self.rng.random_range(0..10u8)))
            .collect()
    }
}

impl PasswordGenerator for PinCodeGenerator {
    fn kind(&self) -> PasswordKind {
        PinConfig::kind()
    }

    fn generate(&mut self) -> Result<String> {
        for attempt in 1..=MAX_ATTEMPTS {
            let pin = self.draw();
            if self.is_acceptable(&pin) {
                tracing::debug!(length = self.config.length, attempt, "Generated PIN");
                return Ok(pin);
            }
        }

        tracing::warn!(
            length = self.config.length,
            attempts = MAX_ATTEMPTS,
            "PIN retry budget exhausted"
        );
        Err(GeneratorError::PinExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}

/// Every digit is the same.
#[must_use]
pub fn is_repeating(pin: &str) -> bool {
    let mut bytes = pin.bytes();
    bytes
        .next()
        .is_some_and(|first| bytes.all(|b| b == first))
}

/// Adjacent digits all step by +1, or all by -1, without wrapping.
#[must_use]
pub fn is_sequential(pin: &str) -> bool {
    let bytes = pin.as_bytes();
    if bytes.len() < 2 {
        return false;
    }
    let steps = || {
        bytes
            .windows(2)
            .map(|pair| i16::from(pair[1]) - i16::from(pair[0]))
    };
    steps().all(|d| d == 1) || steps().all(|d| d == -1)
}
