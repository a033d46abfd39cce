//! Domain service for deck management and love distribution.

use crate::api::types::{DeckDto, LoveResultDto};
use crate::domain::{PlayerId, UnitOwningId};
use thiserror::Error;

/// Domain errors for deck operations.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Deck {0} not found")]
    NotFound(i32),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Reference data inconsistency: {0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for DeckError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for the player's 18 decks.
#[async_trait::async_trait]
pub trait DeckService: Send + Sync {
    /// Fetches the deck at `deck_number`. With `ensure` an absent deck is
    /// created empty under its locale-default name; without it, absence is
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - Returns [`DeckError::Validation`] when `deck_number` is outside 1..=18
    /// - Returns [`DeckError::Database`] on connection failures
    async fn get_deck(
        &self,
        player_id: PlayerId,
        deck_number: i32,
        ensure: bool,
    ) -> Result<Option<DeckDto>, DeckError>;

    /// Replaces the deck's 9 slots with `members` (0 marks an empty slot)
    /// and optionally renames the deck. Existing slot rows are reused
    /// before new ones are created; leftovers are deleted.
    ///
    /// # Errors
    ///
    /// - Returns [`DeckError::Validation`] when `deck_number` is outside
    ///   1..=18, a member is not owned by the player, or a unit appears twice
    /// - Returns [`DeckError::Database`] on connection failures
    async fn save_deck(
        &self,
        player_id: PlayerId,
        deck_number: i32,
        members: [UnitOwningId; 9],
        name: Option<String>,
    ) -> Result<DeckDto, DeckError>;

    /// Distributes `amount` love across the deck's members, center first.
    /// Members reaching their idolized bond cap mark the album and raise an
    /// achievement event. Nothing is written when any member or its
    /// reference rows cannot be resolved.
    ///
    /// # Errors
    ///
    /// - Returns [`DeckError::Validation`] when `deck_number` is outside
    ///   1..=18 or `amount` is negative
    /// - Returns [`DeckError::NotFound`] when the deck does not exist
    /// - Returns [`DeckError::Integrity`] when a slot's unit or reference
    ///   rows are missing, or the deck is not fully populated
    /// - Returns [`DeckError::Database`] on connection failures
    async fn apply_love(
        &self,
        player_id: PlayerId,
        deck_number: i32,
        amount: i64,
    ) -> Result<LoveResultDto, DeckError>;
}
