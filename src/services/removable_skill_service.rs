//! Domain service for removable-skill inventory and attachments.

use crate::api::types::{RemovableSkillOwnedDto, RemovableSkillSummaryDto};
use crate::domain::{PlayerId, RemovableSkillId, UnitOwningId};
use thiserror::Error;

/// Domain errors for removable-skill operations.
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Removable skill {0} not found")]
    NotFound(RemovableSkillId),

    #[error("Unit {0} not found")]
    UnitNotFound(UnitOwningId),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for SkillError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for removable skills.
#[async_trait::async_trait]
pub trait SkillService: Send + Sync {
    /// Adds `amount` copies of a removable skill to the player's inventory,
    /// creating the row on first grant.
    ///
    /// # Errors
    ///
    /// - Returns [`SkillError::NotFound`] for an unknown skill definition
    /// - Returns [`SkillError::Validation`] when `amount` is not positive
    /// - Returns [`SkillError::Database`] on connection failures
    async fn grant(
        &self,
        player_id: PlayerId,
        removable_skill_id: RemovableSkillId,
        amount: i64,
    ) -> Result<RemovableSkillOwnedDto, SkillError>;

    /// Equips a removable skill onto a unit. Returns false without writing
    /// when the pair is already attached.
    ///
    /// # Errors
    ///
    /// - Returns [`SkillError::UnitNotFound`] if the unit does not exist or
    ///   belongs to another player
    /// - Returns [`SkillError::NotFound`] for an unknown skill definition
    /// - Returns [`SkillError::Validation`] when the unit's capacity is full
    ///   or every owned copy is already equipped elsewhere
    /// - Returns [`SkillError::Database`] on connection failures
    async fn attach(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
        removable_skill_id: RemovableSkillId,
    ) -> Result<bool, SkillError>;

    /// Unequips a removable skill from a unit. Returns false when no such
    /// attachment exists.
    ///
    /// # Errors
    ///
    /// - Returns [`SkillError::UnitNotFound`] if the unit does not exist or
    ///   belongs to another player
    /// - Returns [`SkillError::Database`] on connection failures
    async fn detach(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
        removable_skill_id: RemovableSkillId,
    ) -> Result<bool, SkillError>;

    /// Summarizes the player's removable skills: owned totals, equipped
    /// counts, and attachments grouped by owning unit.
    ///
    /// # Errors
    ///
    /// - Returns [`SkillError::Database`] on connection failures
    async fn summary(&self, player_id: PlayerId) -> Result<RemovableSkillSummaryDto, SkillError>;
}
