//! Domain service for player accounts.

use crate::api::types::PlayerDto;
use crate::domain::PlayerId;
use thiserror::Error;

/// Domain errors for player operations.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Player {0} not found")]
    NotFound(PlayerId),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for PlayerError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for player accounts.
#[async_trait::async_trait]
pub trait PlayerService: Send + Sync {
    /// Creates a player account.
    ///
    /// # Errors
    ///
    /// - Returns [`PlayerError::Validation`] when `name` is empty
    /// - Returns [`PlayerError::Database`] on connection failures
    async fn create(&self, name: &str, locale: &str) -> Result<PlayerDto, PlayerError>;

    /// Fetches a player account.
    ///
    /// # Errors
    ///
    /// - Returns [`PlayerError::NotFound`] for an unknown player
    /// - Returns [`PlayerError::Database`] on connection failures
    async fn get(&self, player_id: PlayerId) -> Result<PlayerDto, PlayerError>;
}
