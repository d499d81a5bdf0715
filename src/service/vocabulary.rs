//! Vocabulary sources for memorable passwords.
//!
//! The caller loads a vocabulary once and passes the words into each
//! [`MemorableConfig`](crate::domain::MemorableConfig); nothing is cached
//! globally.

use std::path::{Path, PathBuf};

use crate::error::{GeneratorError, Result};

/// Word list embedded at compile time.
static BUILTIN_WORDS: &str = include_str!("words.txt");

/// Source of candidate words.
pub trait VocabularySource {
    /// Load the words.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Vocabulary`] if the words cannot be read or
    /// the source is empty.
    fn load(&self) -> Result<Vec<String>>;
}

/// Words held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticVocabulary {
    words: Vec<String>,
}

impl StaticVocabulary {
    /// Wrap an owned word list.
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl VocabularySource for StaticVocabulary {
    fn load(&self) -> Result<Vec<String>> {
        if self.words.is_empty() {
            return Err(GeneratorError::Vocabulary("word list is empty".to_string()));
        }
        Ok(self.words.clone())
    }
}

/// Word list file with one word per line.
#[derive(Debug, Clone)]
pub struct FileVocabulary {
    path: PathBuf,
}

impl FileVocabulary {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the word list.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VocabularySource for FileVocabulary {
    fn load(&self) -> Result<Vec<String>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            GeneratorError::Vocabulary(format!("{}: {e}", self.path.display()))
        })?;

        let words = parse_words(&contents);
        if words.is_empty() {
            return Err(GeneratorError::Vocabulary(format!(
                "{}: no words found",
                self.path.display()
            )));
        }

        tracing::info!(path = %self.path.display(), words = words.len(), "Loaded word list");
        Ok(words)
    }
}

/// The embedded word list.
#[must_use]
pub fn builtin_vocabulary() -> Vec<String> {
    parse_words(BUILTIN_WORDS)
}

fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
