use crate::entities::{players, prelude::*};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Set};

pub struct PlayerRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(&self, name: &str, locale: &str) -> Result<players::Model, DbErr> {
        players::ActiveModel {
            name: Set(name.to_owned()),
            locale: Set(locale.to_owned()),
            center_unit_owning_id: Set(None),
            created_at: Set(Utc::now().to_rfc3339()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<players::Model>, DbErr> {
        Players::find_by_id(id).one(self.conn).await
    }

    pub async fn set_center(
        &self,
        player: players::Model,
        unit_owning_id: i64,
    ) -> Result<players::Model, DbErr> {
        let mut active: players::ActiveModel = player.into();
        active.center_unit_owning_id = Set(Some(unit_owning_id));
        active.update(self.conn).await
    }

    pub async fn clear_center(&self, player: players::Model) -> Result<players::Model, DbErr> {
        let mut active: players::ActiveModel = player.into();
        active.center_unit_owning_id = Set(None);
        active.update(self.conn).await
    }
}
