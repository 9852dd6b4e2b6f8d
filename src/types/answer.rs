//! The 5-point agreement scale

use serde::{Deserialize, Serialize};

use crate::{SCALE_MAX, SCALE_MIN};

/// One point on the agreement scale, serialized as its bare integer value.
///
/// `Neutral` (0) doubles as the value written by a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum AnswerValue {
    StronglyDisagree,
    Disagree,
    Neutral,
    Agree,
    StronglyAgree,
}

impl AnswerValue {
    /// All values in scale order, as the answer buttons are laid out
    pub const ALL: [AnswerValue; 5] = [
        AnswerValue::StronglyDisagree,
        AnswerValue::Disagree,
        AnswerValue::Neutral,
        AnswerValue::Agree,
        AnswerValue::StronglyAgree,
    ];

    /// Numeric score contribution
    pub fn value(&self) -> i8 {
        match self {
            Self::StronglyDisagree => -2,
            Self::Disagree => -1,
            Self::Neutral => 0,
            Self::Agree => 1,
            Self::StronglyAgree => 2,
        }
    }

    /// Parse a scale value, `None` outside `-2..=2`
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            -2 => Some(Self::StronglyDisagree),
            -1 => Some(Self::Disagree),
            0 => Some(Self::Neutral),
            1 => Some(Self::Agree),
            2 => Some(Self::StronglyAgree),
            _ => None,
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::StronglyDisagree => "Discordo Totalmente",
            Self::Disagree => "Discordo Parcialmente",
            Self::Neutral => "Neutro",
            Self::Agree => "Concordo Parcialmente",
            Self::StronglyAgree => "Concordo Totalmente",
        }
    }

    /// Button icon
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::StronglyDisagree => "👎",
            Self::Disagree => "↘️",
            Self::Neutral => "➖",
            Self::Agree => "↗️",
            Self::StronglyAgree => "👍",
        }
    }

    /// 1-based button position (1 = StronglyDisagree ... 5 = StronglyAgree)
    pub fn button(&self) -> usize {
        (self.value() - SCALE_MIN) as usize + 1
    }

    pub fn from_button(button: usize) -> Option<Self> {
        if button == 0 || button > (SCALE_MAX - SCALE_MIN) as usize + 1 {
            return None;
        }
        Self::from_value(SCALE_MIN + (button - 1) as i8)
    }
}

impl TryFrom<i8> for AnswerValue {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::from_value(value)
            .ok_or_else(|| format!("answer value {} outside {}..={}", value, SCALE_MIN, SCALE_MAX))
    }
}

impl From<AnswerValue> for i8 {
    fn from(answer: AnswerValue) -> Self {
        answer.value()
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({:+})", self.emoji(), self.label(), self.value())
    }
}
