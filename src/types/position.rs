//! Position labels along the left-right score axis

use colored::Color;
use serde::{Deserialize, Serialize};

/// One of the 7 bands on the aggregate score axis, ordered left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PositionLabel {
    #[serde(rename = "Esquerda Radical")]
    RadicalLeft,
    #[serde(rename = "Esquerda")]
    Left,
    #[serde(rename = "Centro-Esquerda")]
    CenterLeft,
    #[serde(rename = "Centro")]
    Center,
    #[serde(rename = "Centro-Direita")]
    CenterRight,
    #[serde(rename = "Direita")]
    Right,
    #[serde(rename = "Direita Conservadora")]
    ConservativeRight,
}

impl PositionLabel {
    pub const ALL: [PositionLabel; 7] = [
        PositionLabel::RadicalLeft,
        PositionLabel::Left,
        PositionLabel::CenterLeft,
        PositionLabel::Center,
        PositionLabel::CenterRight,
        PositionLabel::Right,
        PositionLabel::ConservativeRight,
    ];

    /// Display label, also the persisted form
    pub fn label(&self) -> &'static str {
        match self {
            Self::RadicalLeft => "Esquerda Radical",
            Self::Left => "Esquerda",
            Self::CenterLeft => "Centro-Esquerda",
            Self::Center => "Centro",
            Self::CenterRight => "Centro-Direita",
            Self::Right => "Direita",
            Self::ConservativeRight => "Direita Conservadora",
        }
    }

    /// Look up a persisted label string
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.label() == label)
    }

    /// Inclusive lower score bound; `None` for the unbounded first band
    pub fn lower_bound(&self) -> Option<i32> {
        match self {
            Self::RadicalLeft => None,
            Self::Left => Some(crate::THRESHOLD_LEFT),
            Self::CenterLeft => Some(crate::THRESHOLD_CENTER_LEFT),
            Self::Center => Some(crate::THRESHOLD_CENTER),
            Self::CenterRight => Some(crate::THRESHOLD_CENTER_RIGHT),
            Self::Right => Some(crate::THRESHOLD_RIGHT),
            Self::ConservativeRight => Some(crate::THRESHOLD_CONSERVATIVE_RIGHT),
        }
    }

    /// Badge emoji
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::RadicalLeft => "☭",
            Self::Left => "🌹",
            Self::CenterLeft => "⚖️",
            Self::Center => "🎯",
            Self::CenterRight => "⚖️",
            Self::Right => "🦅",
            Self::ConservativeRight => "✝️",
        }
    }

    /// Badge color as `#RRGGBB`
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::RadicalLeft => "#E74C3C",
            Self::Left => "#E67E22",
            Self::CenterLeft => "#F1C40F",
            Self::Center => "#2ECC71",
            Self::CenterRight => "#3498DB",
            Self::Right => "#9B59B6",
            Self::ConservativeRight => "#2C3E50",
        }
    }

    /// Badge color for the terminal
    pub fn color(&self) -> Color {
        let hex = &self.color_hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        Color::TrueColor {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        }
    }
}

impl std::fmt::Display for PositionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
