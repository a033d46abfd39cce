use crate::entities::{prelude::*, removable_skill_inventory, unit_removable_skills};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

/// Mechanism-only access to removable-skill inventory rows and attachment
/// edges. Capacity and ownership policy live in the service layer.
pub struct RemovableSkillRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> RemovableSkillRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    pub async fn get_inventory(
        &self,
        player_id: i64,
        removable_skill_id: i32,
    ) -> Result<Option<removable_skill_inventory::Model>, DbErr> {
        RemovableSkillInventory::find()
            .filter(removable_skill_inventory::Column::PlayerId.eq(player_id))
            .filter(removable_skill_inventory::Column::RemovableSkillId.eq(removable_skill_id))
            .one(self.conn)
            .await
    }

    pub async fn ensure_inventory(
        &self,
        player_id: i64,
        removable_skill_id: i32,
    ) -> Result<removable_skill_inventory::Model, DbErr> {
        if let Some(row) = self.get_inventory(player_id, removable_skill_id).await? {
            return Ok(row);
        }

        removable_skill_inventory::ActiveModel {
            player_id: Set(player_id),
            removable_skill_id: Set(removable_skill_id),
            amount: Set(0),
            created_at: Set(Utc::now().to_rfc3339()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn set_inventory_amount(
        &self,
        row: removable_skill_inventory::Model,
        amount: i64,
    ) -> Result<removable_skill_inventory::Model, DbErr> {
        let mut active: removable_skill_inventory::ActiveModel = row.into();
        active.amount = Set(amount);
        active.update(self.conn).await
    }

    pub async fn all_inventory(
        &self,
        player_id: i64,
    ) -> Result<Vec<removable_skill_inventory::Model>, DbErr> {
        RemovableSkillInventory::find()
            .filter(removable_skill_inventory::Column::PlayerId.eq(player_id))
            .order_by_asc(removable_skill_inventory::Column::RemovableSkillId)
            .all(self.conn)
            .await
    }

    // ========================================================================
    // Attachment edges
    // ========================================================================

    pub async fn get_edge(
        &self,
        unit_owning_id: i64,
        removable_skill_id: i32,
    ) -> Result<Option<unit_removable_skills::Model>, DbErr> {
        UnitRemovableSkills::find()
            .filter(unit_removable_skills::Column::UnitOwningId.eq(unit_owning_id))
            .filter(unit_removable_skills::Column::RemovableSkillId.eq(removable_skill_id))
            .one(self.conn)
            .await
    }

    pub async fn insert_edge(
        &self,
        player_id: i64,
        unit_owning_id: i64,
        removable_skill_id: i32,
    ) -> Result<unit_removable_skills::Model, DbErr> {
        unit_removable_skills::ActiveModel {
            player_id: Set(player_id),
            unit_owning_id: Set(unit_owning_id),
            removable_skill_id: Set(removable_skill_id),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn delete_edge(&self, edge: unit_removable_skills::Model) -> Result<(), DbErr> {
        edge.delete(self.conn).await?;
        Ok(())
    }

    pub async fn edges_for_unit(
        &self,
        unit_owning_id: i64,
    ) -> Result<Vec<unit_removable_skills::Model>, DbErr> {
        UnitRemovableSkills::find()
            .filter(unit_removable_skills::Column::UnitOwningId.eq(unit_owning_id))
            .order_by_asc(unit_removable_skills::Column::RemovableSkillId)
            .all(self.conn)
            .await
    }

    pub async fn edges_for_player(
        &self,
        player_id: i64,
    ) -> Result<Vec<unit_removable_skills::Model>, DbErr> {
        UnitRemovableSkills::find()
            .filter(unit_removable_skills::Column::PlayerId.eq(player_id))
            .order_by_asc(unit_removable_skills::Column::UnitOwningId)
            .all(self.conn)
            .await
    }

    pub async fn count_for_unit(&self, unit_owning_id: i64) -> Result<u64, DbErr> {
        UnitRemovableSkills::find()
            .filter(unit_removable_skills::Column::UnitOwningId.eq(unit_owning_id))
            .count(self.conn)
            .await
    }

    /// Copies of `removable_skill_id` currently equipped across all of the
    /// player's units.
    pub async fn total_equipped(
        &self,
        player_id: i64,
        removable_skill_id: i32,
    ) -> Result<u64, DbErr> {
        UnitRemovableSkills::find()
            .filter(unit_removable_skills::Column::PlayerId.eq(player_id))
            .filter(unit_removable_skills::Column::RemovableSkillId.eq(removable_skill_id))
            .count(self.conn)
            .await
    }

    pub async fn delete_edges_for_unit(&self, unit_owning_id: i64) -> Result<u64, DbErr> {
        let res = UnitRemovableSkills::delete_many()
            .filter(unit_removable_skills::Column::UnitOwningId.eq(unit_owning_id))
            .exec(self.conn)
            .await?;
        Ok(res.rows_affected)
    }
}
