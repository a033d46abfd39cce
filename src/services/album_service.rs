//! Domain service for the collection album projection.

use crate::api::types::{AlbumEntryDto, AlbumSeriesDto};
use crate::domain::PlayerId;
use thiserror::Error;

/// Domain errors for album reads.
#[derive(Debug, Error)]
pub enum AlbumError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for AlbumError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for album reads. The album is written as a side
/// effect of unit and deck mutations; this trait only projects it.
#[async_trait::async_trait]
pub trait AlbumService: Send + Sync {
    /// All album entries for the player, ordered by template id.
    ///
    /// # Errors
    ///
    /// - Returns [`AlbumError::Database`] on connection failures
    async fn all(&self, player_id: PlayerId) -> Result<Vec<AlbumEntryDto>, AlbumError>;

    /// Album entries grouped by the template's series, ordered by series id
    /// then template id. Entries whose template carries no series land in
    /// the trailing unkeyed group.
    ///
    /// # Errors
    ///
    /// - Returns [`AlbumError::Database`] on connection failures
    async fn by_series(&self, player_id: PlayerId) -> Result<Vec<AlbumSeriesDto>, AlbumError>;
}
