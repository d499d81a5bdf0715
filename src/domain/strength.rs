//! Strength score types.

use serde::{Deserialize, Serialize};

/// Qualitative strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    /// Score below 40.
    Weak,
    /// Score in 40..60.
    Medium,
    /// Score in 60..80.
    Strong,
    /// Score of 80 or more.
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    /// Map a 0-100 score to its label.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..40 => Self::Weak,
            40..60 => Self::Medium,
            60..80 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "Weak"),
            Self::Medium => write!(f, "Medium"),
            Self::Strong => write!(f, "Strong"),
            Self::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Score and label computed for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// Score in `0..=100`.
    pub score: u8,
    /// Label derived from the score.
    pub label: StrengthLabel,
}

impl StrengthResult {
    /// Build a result from a score, clamping it to 100.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        let score = if score > 100 { 100 } else { score };
        Self {
            score,
            label: StrengthLabel::from_score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(39), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(40), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(59), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(60), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(79), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(80), StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_score(100), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_result_clamps() {
        let result = StrengthResult::from_score(250);
        assert_eq!(result.score, 100);
        assert_eq!(result.label, StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&StrengthResult::from_score(85)).unwrap();
        assert_eq!(json, r#"{"score":85,"label":"Very Strong"}"#);
    }
}
