use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::domain::events::{AchievementSink, NoopAchievementSink};
use crate::services::{
    AlbumService, DeckService, PlayerService, SeaOrmAlbumService, SeaOrmDeckService,
    SeaOrmPlayerService, SeaOrmSkillService, SeaOrmUnitService, SkillService, UnitService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub player_service: Arc<dyn PlayerService>,

    pub unit_service: Arc<dyn UnitService>,

    pub deck_service: Arc<dyn DeckService>,

    pub skill_service: Arc<dyn SkillService>,

    pub album_service: Arc<dyn AlbumService>,

    pub achievements: Arc<dyn AchievementSink>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let achievements: Arc<dyn AchievementSink> = Arc::new(NoopAchievementSink);

        Self {
            config: Arc::new(RwLock::new(config)),
            player_service: Arc::new(SeaOrmPlayerService::new(store.clone())),
            unit_service: Arc::new(SeaOrmUnitService::new(store.clone())),
            deck_service: Arc::new(SeaOrmDeckService::new(store.clone(), achievements.clone())),
            skill_service: Arc::new(SeaOrmSkillService::new(store.clone())),
            album_service: Arc::new(SeaOrmAlbumService::new(store.clone())),
            achievements,
            store,
        }
    }
}
