//! Domain service for the unit collection.
//!
//! This module provides the [`UnitService`] trait covering acquisition,
//! idolization, disposal, supporter stacks, and derived unit info.

use crate::api::types::{IdolizeResultDto, SupporterDto, UnitInfoDto};
use crate::domain::{PlayerId, UnitOwningId, UnitTemplateId};
use thiserror::Error;

/// Domain errors for unit operations.
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("Unit {0} not found")]
    NotFound(UnitOwningId),

    #[error("Unit template {0} not found")]
    TemplateNotFound(UnitTemplateId),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Reference data inconsistency: {0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for UnitError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for unit collection operations.
///
/// Every mutation runs inside a single transaction so album bookkeeping
/// always lands together with the unit rows it describes.
#[async_trait::async_trait]
pub trait UnitService: Send + Sync {
    /// Acquires a copy of `unit_id` for the player as a fresh owned unit
    /// and marks the album. Support-only templates cannot be acquired and
    /// are reported the same way as unknown ids; they enter play through
    /// [`UnitService::add_supporter`] instead.
    ///
    /// # Errors
    ///
    /// - Returns [`UnitError::TemplateNotFound`] for an unknown or
    ///   support-only template
    /// - Returns [`UnitError::Integrity`] when the template's rarity tier is missing
    /// - Returns [`UnitError::Database`] on connection failures
    async fn acquire(
        &self,
        player_id: PlayerId,
        unit_id: UnitTemplateId,
    ) -> Result<UnitInfoDto, UnitError>;

    /// Lists the player's owned units with fully derived info, ordered by
    /// owning id.
    ///
    /// # Errors
    ///
    /// - Returns [`UnitError::Integrity`] when reference rows are missing
    /// - Returns [`UnitError::Database`] on connection failures
    async fn list_units(&self, player_id: PlayerId) -> Result<Vec<UnitInfoDto>, UnitError>;

    /// Gets fully derived info for one owned unit.
    ///
    /// # Errors
    ///
    /// - Returns [`UnitError::NotFound`] if the unit does not exist or belongs
    ///   to another player
    /// - Returns [`UnitError::Integrity`] when reference rows are missing
    /// - Returns [`UnitError::Database`] on connection failures
    async fn get_unit(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
    ) -> Result<UnitInfoDto, UnitError>;

    /// Deletes an owned unit along with its deck slots and skill attachments.
    ///
    /// # Errors
    ///
    /// - Returns [`UnitError::NotFound`] if the unit does not exist or belongs
    ///   to another player
    /// - Returns [`UnitError::Database`] on connection failures
    async fn dispose(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
    ) -> Result<(), UnitError>;

    /// Promotes a unit to its maximum rank, lifting its level cap and
    /// marking the album. `changed` is false when the unit already sits at
    /// max rank.
    ///
    /// # Errors
    ///
    /// - Returns [`UnitError::NotFound`] if the unit does not exist or belongs
    ///   to another player
    /// - Returns [`UnitError::Integrity`] when reference rows are missing
    /// - Returns [`UnitError::Database`] on connection failures
    async fn idolize(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
    ) -> Result<IdolizeResultDto, UnitError>;

    /// Makes the unit the player's center.
    ///
    /// # Errors
    ///
    /// - Returns [`UnitError::NotFound`] if the unit does not exist or belongs
    ///   to another player
    /// - Returns [`UnitError::Database`] on connection failures
    async fn set_center(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
    ) -> Result<(), UnitError>;

    /// Adds `quantity` copies of a support-only template to the stack and
    /// marks the album entry with every flag raised.
    ///
    /// # Errors
    ///
    /// - Returns [`UnitError::TemplateNotFound`] for an unknown template
    /// - Returns [`UnitError::Validation`] when the template is not
    ///   support-only or `quantity` is not positive
    /// - Returns [`UnitError::Database`] on connection failures
    async fn add_supporter(
        &self,
        player_id: PlayerId,
        unit_id: UnitTemplateId,
        quantity: i64,
    ) -> Result<SupporterDto, UnitError>;

    /// Consumes `quantity` copies from the supporter stack. `consumed` is
    /// false when the stack holds fewer copies than requested, leaving the
    /// stack untouched.
    ///
    /// # Errors
    ///
    /// - Returns [`UnitError::Validation`] when `quantity` is not positive
    /// - Returns [`UnitError::Database`] on connection failures
    async fn sub_supporter(
        &self,
        player_id: PlayerId,
        unit_id: UnitTemplateId,
        quantity: i64,
    ) -> Result<(bool, SupporterDto), UnitError>;

    /// Lists the player's supporter stacks ordered by template id.
    ///
    /// # Errors
    ///
    /// - Returns [`UnitError::Database`] on connection failures
    async fn list_supporters(&self, player_id: PlayerId) -> Result<Vec<SupporterDto>, UnitError>;

    /// Number of active owned units.
    ///
    /// # Errors
    ///
    /// - Returns [`UnitError::Database`] on connection failures
    async fn count_units(&self, player_id: PlayerId) -> Result<u64, UnitError>;
}
