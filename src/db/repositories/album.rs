use crate::domain::AlbumFlags;
use crate::entities::{album_entries, prelude::*};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

pub struct AlbumRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AlbumRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn get(
        &self,
        player_id: i64,
        unit_id: i32,
    ) -> Result<Option<album_entries::Model>, DbErr> {
        AlbumEntries::find()
            .filter(album_entries::Column::PlayerId.eq(player_id))
            .filter(album_entries::Column::UnitId.eq(unit_id))
            .one(self.conn)
            .await
    }

    /// Records a sighting of `unit_id`. Flags are OR'd into the existing
    /// entry and `love_seen` only ever raises `highest_love`; an entry is
    /// created on first sight.
    pub async fn update(
        &self,
        player_id: i64,
        unit_id: i32,
        flags: AlbumFlags,
        love_seen: i64,
    ) -> Result<album_entries::Model, DbErr> {
        match self.get(player_id, unit_id).await? {
            Some(entry) => {
                let rank_max = entry.rank_max_flag || flags.rank_max;
                let love_max = entry.love_max_flag || flags.love_max;
                let rank_level_max = entry.rank_level_max_flag || flags.rank_level_max;
                let signed = entry.sign_flag || flags.signed;
                let highest = entry.highest_love.max(love_seen);

                let unchanged = rank_max == entry.rank_max_flag
                    && love_max == entry.love_max_flag
                    && rank_level_max == entry.rank_level_max_flag
                    && signed == entry.sign_flag
                    && highest == entry.highest_love;
                if unchanged {
                    return Ok(entry);
                }

                let mut active: album_entries::ActiveModel = entry.into();
                active.rank_max_flag = Set(rank_max);
                active.love_max_flag = Set(love_max);
                active.rank_level_max_flag = Set(rank_level_max);
                active.sign_flag = Set(signed);
                active.highest_love = Set(highest);
                active.update(self.conn).await
            }
            None => {
                album_entries::ActiveModel {
                    player_id: Set(player_id),
                    unit_id: Set(unit_id),
                    rank_max_flag: Set(flags.rank_max),
                    love_max_flag: Set(flags.love_max),
                    rank_level_max_flag: Set(flags.rank_level_max),
                    sign_flag: Set(flags.signed),
                    highest_love: Set(love_seen),
                    favorite_point: Set(0),
                    ..Default::default()
                }
                .insert(self.conn)
                .await
            }
        }
    }

    pub async fn all(&self, player_id: i64) -> Result<Vec<album_entries::Model>, DbErr> {
        AlbumEntries::find()
            .filter(album_entries::Column::PlayerId.eq(player_id))
            .order_by_asc(album_entries::Column::UnitId)
            .all(self.conn)
            .await
    }
}
