use crate::entities::{prelude::*, unit_supporters, units};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

/// Column values for a freshly acquired unit. Progression fields start at
/// their template-derived defaults.
pub struct NewUnit {
    pub player_id: i64,
    pub unit_id: i32,
    pub rank: i32,
    pub max_level: i32,
    pub level_limit_id: i32,
    pub removable_skill_capacity: i32,
}

pub struct UnitRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> UnitRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, new: NewUnit) -> Result<units::Model, DbErr> {
        units::ActiveModel {
            player_id: Set(new.player_id),
            unit_id: Set(new.unit_id),
            exp: Set(0),
            skill_exp: Set(0),
            rank: Set(new.rank),
            display_rank: Set(new.rank),
            max_level: Set(new.max_level),
            level_limit_id: Set(new.level_limit_id),
            love: Set(0),
            removable_skill_capacity: Set(new.removable_skill_capacity),
            favorite: Set(false),
            is_signed: Set(false),
            active: Set(true),
            created_at: Set(Utc::now().to_rfc3339()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<units::Model>, DbErr> {
        Units::find_by_id(id).one(self.conn).await
    }

    /// Looks the unit up with an ownership filter so another player's unit
    /// is indistinguishable from a missing one.
    pub async fn get_for_player(
        &self,
        id: i64,
        player_id: i64,
    ) -> Result<Option<units::Model>, DbErr> {
        Units::find_by_id(id)
            .filter(units::Column::PlayerId.eq(player_id))
            .one(self.conn)
            .await
    }

    /// Active units only; benched copies stay out of listings.
    pub async fn all_for_player(&self, player_id: i64) -> Result<Vec<units::Model>, DbErr> {
        Units::find()
            .filter(units::Column::PlayerId.eq(player_id))
            .filter(units::Column::Active.eq(true))
            .order_by_asc(units::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn count_for_player(&self, player_id: i64) -> Result<u64, DbErr> {
        Units::find()
            .filter(units::Column::PlayerId.eq(player_id))
            .filter(units::Column::Active.eq(true))
            .count(self.conn)
            .await
    }

    pub async fn update(&self, active: units::ActiveModel) -> Result<units::Model, DbErr> {
        active.update(self.conn).await
    }

    pub async fn delete(&self, unit: units::Model) -> Result<(), DbErr> {
        unit.delete(self.conn).await?;
        Ok(())
    }

    // ========================================================================
    // Supporter stacks
    // ========================================================================

    pub async fn get_supporter(
        &self,
        player_id: i64,
        unit_id: i32,
    ) -> Result<Option<unit_supporters::Model>, DbErr> {
        UnitSupporters::find()
            .filter(unit_supporters::Column::PlayerId.eq(player_id))
            .filter(unit_supporters::Column::UnitId.eq(unit_id))
            .one(self.conn)
            .await
    }

    /// Fetches the supporter row for `unit_id`, creating a zero-amount row
    /// when the player has never held that supporter.
    pub async fn ensure_supporter(
        &self,
        player_id: i64,
        unit_id: i32,
    ) -> Result<unit_supporters::Model, DbErr> {
        if let Some(row) = self.get_supporter(player_id, unit_id).await? {
            return Ok(row);
        }

        unit_supporters::ActiveModel {
            player_id: Set(player_id),
            unit_id: Set(unit_id),
            amount: Set(0),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn set_supporter_amount(
        &self,
        row: unit_supporters::Model,
        amount: i64,
    ) -> Result<unit_supporters::Model, DbErr> {
        let mut active: unit_supporters::ActiveModel = row.into();
        active.amount = Set(amount);
        active.update(self.conn).await
    }

    pub async fn all_supporters(
        &self,
        player_id: i64,
    ) -> Result<Vec<unit_supporters::Model>, DbErr> {
        UnitSupporters::find()
            .filter(unit_supporters::Column::PlayerId.eq(player_id))
            .order_by_asc(unit_supporters::Column::UnitId)
            .all(self.conn)
            .await
    }
}
