//! Password strength scoring.
//!
//! A score between 0 and [`MAX_SCORE`] is built from length and character
//! variety, then bucketed into a [`StrengthTier`] for display.

use serde::Serialize;

pub const MAX_SCORE: u8 = 6;

/// Characters counted as symbols when scoring. Wider than the generator's set so
/// that user-supplied passwords get credit for quotes and slashes.
pub const SCORED_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

struct TierStyle {
    label: &'static str,
    fill_width: u8,
    style_class: &'static str,
}

// Indexed by `StrengthTier as usize`.
static TIER_STYLES: [TierStyle; 5] = [
    TierStyle { label: "Very Weak", fill_width: 20, style_class: "weak" },
    TierStyle { label: "Weak", fill_width: 40, style_class: "weak" },
    TierStyle { label: "Medium", fill_width: 60, style_class: "medium" },
    TierStyle { label: "Strong", fill_width: 80, style_class: "strong" },
    TierStyle { label: "Very Strong", fill_width: 100, style_class: "very-strong" },
];

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthTier::VeryWeak,
            2 => StrengthTier::Weak,
            3 => StrengthTier::Medium,
            4 => StrengthTier::Strong,
            _ => StrengthTier::VeryStrong,
        }
    }

    fn style(self) -> &'static TierStyle {
        &TIER_STYLES[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.style().label
    }

    /// Percentage of the strength bar to fill.
    pub fn fill_width(self) -> u8 {
        self.style().fill_width
    }

    pub fn style_class(self) -> &'static str {
        self.style().style_class
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub tier: StrengthTier,
}

pub fn score(password: &str) -> u8 {
    let mut score = 0;

    let length = password.chars().count();
    if length >= 12 {
        score += 2;
    } else if length >= 8 {
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
    if password.chars().any(|c| SCORED_SYMBOLS.contains(c)) {
        score += 1;
    }

    score
}

pub fn tier(score: u8) -> StrengthTier {
    StrengthTier::from_score(score)
}

pub fn evaluate(password: &str) -> Strength {
    let score = score(password);

    Strength {
        score,
        tier: tier(score),
    }
}
