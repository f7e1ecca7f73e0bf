//! Password strength scoring.
//!
//! The score is a function of the string alone, not of any generator
//! options, so a UI can rate passwords the user typed just as well as
//! generated ones.

use std::fmt;

/// Bucketed strength rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Human-readable form of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A password's score (0-7) and its label bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    /// One point per length threshold (8, 12, 16) plus one per
    /// character class present.
    pub score: u8,

    /// `score` bucketed: Weak <= 2, Fair <= 4, Good <= 6, Strong = 7.
    pub label: StrengthLabel,
}

/// Score a password string.
///
/// Up to three points for length (>= 8, >= 12, >= 16) and one point for
/// each character class present: lowercase, uppercase, digit, and
/// anything else.
pub fn score_password(password: &str) -> PasswordStrength {
    let mut score = 0u8;

    let length = password.chars().count();
    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    let label = match score {
        0..=2 => StrengthLabel::Weak,
        3..=4 => StrengthLabel::Fair,
        5..=6 => StrengthLabel::Good,
        _ => StrengthLabel::Strong,
    };

    PasswordStrength { score, label }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_scores_zero() {
        let strength = score_password("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, StrengthLabel::Weak);
    }

    #[test]
    fn lowercase_only_short_is_weak() {
        // Length 8 (+1) and lowercase (+1).
        let strength = score_password("abcdefgh");
        assert_eq!(strength.score, 2);
        assert_eq!(strength.label, StrengthLabel::Weak);
    }

    #[test]
    fn mixed_case_digits_at_twelve_is_good() {
        // Length 12 (+2), lowercase, uppercase, digit (+3).
        let strength = score_password("Abcdefgh2345");
        assert_eq!(strength.score, 5);
        assert_eq!(strength.label, StrengthLabel::Good);
    }

    #[test]
    fn all_classes_at_sixteen_is_strong() {
        let strength = score_password("Abcdefgh2345!&*?");
        assert_eq!(strength.score, 7);
        assert_eq!(strength.label, StrengthLabel::Strong);
    }

    #[test]
    fn non_ascii_counts_as_symbol_class() {
        let strength = score_password("pässwort");
        // Length 8, lowercase, and the umlaut as "other".
        assert_eq!(strength.score, 3);
        assert_eq!(strength.label, StrengthLabel::Fair);
    }
}
