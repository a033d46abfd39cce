//! Domain primitives shared across services and the API layer.

pub mod events;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row id of a player account.
pub type PlayerId = i64;

/// Row id of an owned unit (unique per acquisition, not per template).
pub type UnitOwningId = i64;

/// Reference id of a unit template.
pub type UnitTemplateId = i32;

/// Reference id of a removable-skill definition.
pub type RemovableSkillId = i32;

/// Supported client locales. Selects the default deck-name template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Jp,
}

impl Locale {
    /// Default name for the deck at `index` (1-based). Index 1 maps to "A".
    #[must_use]
    pub fn deck_default_name(&self, index: i32) -> String {
        let letter = char::from(b'A' + (index - 1).clamp(0, 25) as u8);
        match self {
            Self::En => format!("Team {letter}"),
            Self::Jp => format!("ユニット{letter}"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Jp => write!(f, "jp"),
        }
    }
}

/// Album milestone flags raised by a mutation. Each flag can only ever
/// turn an entry's corresponding bit on.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlbumFlags {
    pub rank_max: bool,
    pub love_max: bool,
    pub rank_level_max: bool,
    pub signed: bool,
}

impl Locale {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "jp" => Self::Jp,
            _ => Self::En,
        }
    }
}
