use serde::Serialize;

use crate::charset::ClassSet;
use crate::generators::Generated;
use crate::strength::{ Strength, StrengthTier };

const BAR_CELLS: u8 = 10;

/// What gets shown to the user after a generate or check.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<ClassSet>,
    pub fallback: bool,
    /// Set once the password has been placed on the clipboard.
    pub copied: bool,
    pub score: u8,
    pub tier: StrengthTier,
    pub label: &'static str,
    pub fill_width: u8,
    pub style_class: &'static str,
}

impl Report {
    pub fn generated(generated: Generated, strength: Strength) -> Self {
        Self {
            password: Some(generated.password),
            classes: Some(generated.classes),
            fallback: generated.fallback,
            ..Self::checked(strength)
        }
    }

    /// Report for a user-supplied password, which is never echoed back.
    pub fn checked(strength: Strength) -> Self {
        Self {
            password: None,
            classes: None,
            fallback: false,
            copied: false,
            score: strength.score,
            tier: strength.tier,
            label: strength.tier.label(),
            fill_width: strength.tier.fill_width(),
            style_class: strength.tier.style_class(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        if let Some(password) = &self.password {
            lines.push(password.clone());
        }
        if self.fallback {
            if let Some(classes) = &self.classes {
                lines.push(format!("No character classes selected, used: {}", classes));
            }
        }
        if self.copied {
            lines.push(String::from("Copied to clipboard"));
        }
        lines.push(format!("Strength: {} {} {}%", self.label, bar(self.fill_width), self.fill_width));

        lines.join("\n")
    }
}

fn bar(fill_width: u8) -> String {
    let filled = (fill_width.min(100) / (100 / BAR_CELLS)) as usize;
    let empty = BAR_CELLS as usize - filled;

    format!("[{}{}]", "#".repeat(filled), ".".repeat(empty))
}
