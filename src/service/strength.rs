//! Password strength scoring.
//!
//! The score combines three parts:
//! - length: up to 40 points, growing linearly from 5 to 20 characters
//! - diversity: 10 points per character class present (upper, lower, digit, symbol)
//! - bonus: 20 points for digits and symbols together, 10 for either

use crate::domain::StrengthResult;

const LENGTH_WEIGHT: f64 = 40.0;
const DIVERSITY_WEIGHT: f64 = 40.0;
const FREE_LENGTH: usize = 4;
const LENGTH_CAP: usize = 16;

/// Score a password.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::from_score(0);
    }

    let length = password.chars().count();
    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());

    let length_score = if length > FREE_LENGTH {
        ratio((length - FREE_LENGTH).min(LENGTH_CAP), LENGTH_CAP) * LENGTH_WEIGHT
    } else {
        0.0
    };

    let classes = [has_upper, has_lower, has_digit, has_symbol]
        .into_iter()
        .filter(|present| *present)
        .count();
    let diversity_score = ratio(classes, 4) * DIVERSITY_WEIGHT;

    let bonus = match (has_digit, has_symbol) {
        (true, true) => 20.0,
        (true, false) | (false, true) => 10.0,
        (false, false) => 0.0,
    };

    // Halves round to even.
    let total = (length_score + diversity_score + bonus)
        .round_ties_even()
        .clamp(0.0, 100.0);

    StrengthResult::from_score(total as u8)
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64
}
