use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SettleError;

/// Result of the per-hole pot game ("olympic").
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    None,
    Gold,
    Silver,
    Bronze,
    Iron,
    Diamond,
}

impl Outcome {
    /// The five outcomes that carry a rate, in rate-table order.
    pub const RATED: [Outcome; 5] = [
        Outcome::Gold,
        Outcome::Silver,
        Outcome::Bronze,
        Outcome::Iron,
        Outcome::Diamond,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
            Self::Iron => "iron",
            Self::Diamond => "diamond",
        }
    }

    /// Parse an outcome label.
    ///
    /// Accepts the english labels (any case), an empty label for no result, and the
    /// score sheet labels 金, 銀, 銅, 鉄 and ダイヤモンド.
    ///
    /// # Errors
    /// Returns `SettleError::InvalidOutcome` for any other label.
    pub fn from_label(label: &str) -> Result<Self, SettleError> {
        let trimmed = label.trim();
        let outcome = match trimmed.to_ascii_lowercase().as_str() {
            "" | "none" => Self::None,
            "gold" | "金" => Self::Gold,
            "silver" | "銀" => Self::Silver,
            "bronze" | "銅" => Self::Bronze,
            "iron" | "鉄" => Self::Iron,
            "diamond" | "ダイヤモンド" => Self::Diamond,
            _ => return Err(SettleError::InvalidOutcome(label.to_string())),
        };
        Ok(outcome)
    }
}

impl FromStr for Outcome {
    type Err = SettleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Under-par result class, derived from the stroke differential.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "PascalCase")]
pub enum SpecialTier {
    Birdie,
    Eagle,
    Albatross,
}

impl SpecialTier {
    #[must_use]
    pub fn from_stroke_diff(diff: i8) -> Option<Self> {
        match diff {
            -1 => Some(Self::Birdie),
            -2 => Some(Self::Eagle),
            d if d <= -3 => Some(Self::Albatross),
            _ => None,
        }
    }

    /// Points credited for the tier.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::Birdie => 1,
            Self::Eagle => 3,
            Self::Albatross => 5,
        }
    }
}

impl fmt::Display for SpecialTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Birdie => "birdie",
            Self::Eagle => "eagle",
            Self::Albatross => "albatross",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Olympic,
    Snake,
    Special,
}

impl Category {
    /// Credit categories are paid to the event owner by everyone else; snake is paid
    /// by the owner to everyone else.
    #[must_use]
    pub fn is_credit(self) -> bool {
        matches!(self, Self::Olympic | Self::Special)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Olympic => "olympic",
            Self::Snake => "snake",
            Self::Special => "special",
        };
        write!(f, "{s}")
    }
}
