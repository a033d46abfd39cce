//! `SeaORM` implementation of the `AlbumService` trait.

use crate::api::types::{AlbumEntryDto, AlbumSeriesDto};
use crate::db::Store;
use crate::db::repositories::AlbumRepository;
use crate::domain::PlayerId;
use crate::entities::{album_entries, prelude::*, unit_templates};
use crate::services::album_service::{AlbumError, AlbumService};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use std::collections::{BTreeMap, HashMap};

pub struct SeaOrmAlbumService {
    store: Store,
}

impl SeaOrmAlbumService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn to_dto(entry: album_entries::Model) -> AlbumEntryDto {
        AlbumEntryDto {
            unit_id: entry.unit_id,
            all_max_flag: entry.rank_max_flag && entry.love_max_flag && entry.rank_level_max_flag,
            rank_max_flag: entry.rank_max_flag,
            love_max_flag: entry.love_max_flag,
            rank_level_max_flag: entry.rank_level_max_flag,
            sign_flag: entry.sign_flag,
            highest_love: entry.highest_love,
            favorite_point: entry.favorite_point,
        }
    }
}

#[async_trait]
impl AlbumService for SeaOrmAlbumService {
    async fn all(&self, player_id: PlayerId) -> Result<Vec<AlbumEntryDto>, AlbumError> {
        let entries = AlbumRepository::new(&self.store.conn).all(player_id).await?;
        Ok(entries.into_iter().map(Self::to_dto).collect())
    }

    async fn by_series(&self, player_id: PlayerId) -> Result<Vec<AlbumSeriesDto>, AlbumError> {
        let entries = AlbumRepository::new(&self.store.conn).all(player_id).await?;

        let template_ids: Vec<i32> = entries.iter().map(|e| e.unit_id).collect();
        let series_by_template: HashMap<i32, Option<i32>> = UnitTemplates::find()
            .filter(unit_templates::Column::UnitId.is_in(template_ids))
            .all(&self.store.conn)
            .await?
            .into_iter()
            .map(|t| (t.unit_id, t.album_series_id))
            .collect();

        // Keyed series in id order; entries without a series trail behind.
        let mut keyed: BTreeMap<i32, Vec<AlbumEntryDto>> = BTreeMap::new();
        let mut unkeyed: Vec<AlbumEntryDto> = Vec::new();
        for entry in entries {
            let series = series_by_template.get(&entry.unit_id).copied().flatten();
            match series {
                Some(series_id) => keyed.entry(series_id).or_default().push(Self::to_dto(entry)),
                None => unkeyed.push(Self::to_dto(entry)),
            }
        }

        let mut groups: Vec<AlbumSeriesDto> = keyed
            .into_iter()
            .map(|(series_id, entries)| AlbumSeriesDto {
                series_id: Some(series_id),
                entries,
            })
            .collect();
        if !unkeyed.is_empty() {
            groups.push(AlbumSeriesDto {
                series_id: None,
                entries: unkeyed,
            });
        }

        Ok(groups)
    }
}
