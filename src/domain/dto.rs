//! Export objects for generated passwords.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PasswordKind, StrengthResult};
use crate::service::strength;

/// Export file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The bare password.
    #[default]
    Text,
    /// Password with its type and strength.
    Json,
}

impl ExportFormat {
    /// Conventional file extension.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Plain text (.txt)"),
            Self::Json => write!(f, "JSON (.json)"),
        }
    }
}

/// Exported password with its strength.
///
/// Serializes to `{"password": ..., "type": ..., "strength": {"score": ..., "label": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordExport {
    /// Generated password.
    pub password: String,

    /// Generator kind.
    #[serde(rename = "type")]
    pub kind: PasswordKind,

    /// Strength recomputed from the password.
    pub strength: StrengthResult,
}

impl PasswordExport {
    /// Create an export, scoring the password.
    #[must_use]
    pub fn new(password: impl Into<String>, kind: PasswordKind) -> Self {
        let password = password.into();
        let strength = strength::score(&password);
        Self {
            password,
            kind,
            strength,
        }
    }

    /// Render the export in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: ExportFormat) -> serde_json::Result<String> {
        match format {
            ExportFormat::Text => Ok(self.password.clone()),
            ExportFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    /// Write the export to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn write_to(&self, path: &Path, format: ExportFormat) -> std::io::Result<()> {
        let contents = self.render(format)?;
        std::fs::write(path, contents)
    }
}
