//! `SeaORM` implementation of the `PlayerService` trait.

use crate::api::types::PlayerDto;
use crate::db::Store;
use crate::db::repositories::PlayerRepository;
use crate::domain::{Locale, PlayerId};
use crate::services::player_service::{PlayerError, PlayerService};
use async_trait::async_trait;

pub struct SeaOrmPlayerService {
    store: Store,
}

impl SeaOrmPlayerService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PlayerService for SeaOrmPlayerService {
    async fn create(&self, name: &str, locale: &str) -> Result<PlayerDto, PlayerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlayerError::Validation("name must not be empty".into()));
        }

        // Unknown locale tags fall back to English.
        let locale = Locale::from_tag(locale).to_string();

        let player = PlayerRepository::new(&self.store.conn)
            .create(name, &locale)
            .await?;
        Ok(player.into())
    }

    async fn get(&self, player_id: PlayerId) -> Result<PlayerDto, PlayerError> {
        let player = PlayerRepository::new(&self.store.conn)
            .get(player_id)
            .await?
            .ok_or(PlayerError::NotFound(player_id))?;
        Ok(player.into())
    }
}
