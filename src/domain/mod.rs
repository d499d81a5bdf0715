//! Domain models for Passcraft.
//!
//! This module contains the generator configurations, strength results,
//! the session history and the export object.

pub mod config;
pub mod dto;
pub mod history;
pub mod strength;

pub use config::{
    CharacterClasses, DEFAULT_BLOCKED_PINS, GeneratorConfig, GeneratorSettings, MemorableConfig,
    PasswordKind, PinConfig, RandomConfig, WordSampling,
};
pub use dto::{ExportFormat, PasswordExport};
pub use history::{History, HistoryEntry};
pub use strength::{StrengthLabel, StrengthResult};
