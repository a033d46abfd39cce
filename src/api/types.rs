//! Request and response DTOs shared by the API layer and the services.

use serde::{Deserialize, Serialize};

use crate::domain::events::AchievementEvent;
use crate::entities::{players, removable_skill_inventory, unit_supporters};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// Players
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PlayerDto {
    pub id: i64,
    pub name: String,
    pub locale: String,
    pub center_unit_owning_id: Option<i64>,
}

impl From<players::Model> for PlayerDto {
    fn from(m: players::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            locale: m.locale,
            center_unit_owning_id: m.center_unit_owning_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
    #[serde(default)]
    pub locale: Option<String>,
}

// ============================================================================
// Units
// ============================================================================

/// Fully derived state of one owned unit. Everything beyond the stored
/// columns (level, stats, caps, flags) is recomputed from the reference
/// tables on read.
#[derive(Debug, Clone, Serialize)]
pub struct UnitInfoDto {
    pub unit_owning_id: i64,
    pub unit_id: i32,
    pub name: String,
    pub exp: i64,
    pub next_exp: i64,
    pub level: i32,
    pub max_level: i32,
    pub rank: i32,
    pub max_rank: i32,
    pub display_rank: i32,
    pub level_limit_id: i32,
    pub love: i64,
    pub max_love: i64,
    pub skill_level: i32,
    pub skill_exp: i64,
    pub smile: i32,
    pub pure: i32,
    pub cool: i32,
    pub hp: i32,
    pub removable_skill_capacity: i32,
    pub favorite: bool,
    pub is_rank_max: bool,
    pub is_love_max: bool,
    pub is_level_max: bool,
    pub is_signed: bool,
    pub is_skill_level_max: bool,
    pub is_removable_skill_capacity_max: bool,
    pub insert_date: String,
}

#[derive(Debug, Deserialize)]
pub struct AcquireUnitRequest {
    pub unit_id: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdolizeResultDto {
    pub changed: bool,
    pub unit: UnitInfoDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupporterDto {
    pub unit_id: i32,
    pub amount: i64,
}

impl From<unit_supporters::Model> for SupporterDto {
    fn from(m: unit_supporters::Model) -> Self {
        Self {
            unit_id: m.unit_id,
            amount: m.amount,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SupporterRequest {
    pub unit_id: i32,
    pub quantity: i64,
}

// ============================================================================
// Decks
// ============================================================================

/// A deck with its 9 slots flattened to owning ids; 0 marks an empty slot.
#[derive(Debug, Clone, Serialize)]
pub struct DeckDto {
    pub deck_number: i32,
    pub name: String,
    pub unit_owning_ids: [i64; 9],
}

#[derive(Debug, Deserialize)]
pub struct SaveDeckRequest {
    pub unit_owning_ids: [i64; 9],
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyLoveRequest {
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoveResultDto {
    /// Love actually absorbed by the deck; overflow past every member's cap
    /// is discarded.
    pub distributed: i64,
    /// Post-distribution bond per slot, in deck order.
    pub member_loves: [i64; 9],
    pub achievements: Vec<AchievementEvent>,
}

// ============================================================================
// Removable skills
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RemovableSkillOwnedDto {
    pub removable_skill_id: i32,
    pub total_amount: i64,
    pub equipped_amount: i64,
}

impl From<removable_skill_inventory::Model> for RemovableSkillOwnedDto {
    fn from(m: removable_skill_inventory::Model) -> Self {
        Self {
            removable_skill_id: m.removable_skill_id,
            total_amount: m.amount,
            equipped_amount: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitAttachmentsDto {
    pub unit_owning_id: i64,
    pub removable_skill_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemovableSkillSummaryDto {
    pub owned: Vec<RemovableSkillOwnedDto>,
    pub equipped_by_unit: Vec<UnitAttachmentsDto>,
}

#[derive(Debug, Deserialize)]
pub struct GrantSkillRequest {
    pub removable_skill_id: i32,
    pub amount: i64,
}

// ============================================================================
// Album
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AlbumEntryDto {
    pub unit_id: i32,
    pub rank_max_flag: bool,
    pub love_max_flag: bool,
    pub rank_level_max_flag: bool,
    pub all_max_flag: bool,
    pub sign_flag: bool,
    pub highest_love: i64,
    pub favorite_point: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlbumSeriesDto {
    pub series_id: Option<i32>,
    pub entries: Vec<AlbumEntryDto>,
}
