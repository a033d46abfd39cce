//! `SeaORM` implementation of the `SkillService` trait.

use crate::api::types::{RemovableSkillOwnedDto, RemovableSkillSummaryDto, UnitAttachmentsDto};
use crate::db::Store;
use crate::db::repositories::{ReferenceRepository, RemovableSkillRepository, UnitRepository};
use crate::domain::{PlayerId, RemovableSkillId, UnitOwningId};
use crate::services::removable_skill_service::{SkillError, SkillService};
use async_trait::async_trait;
use sea_orm::TransactionTrait;

pub struct SeaOrmSkillService {
    store: Store,
}

impl SeaOrmSkillService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SkillService for SeaOrmSkillService {
    async fn grant(
        &self,
        player_id: PlayerId,
        removable_skill_id: RemovableSkillId,
        amount: i64,
    ) -> Result<RemovableSkillOwnedDto, SkillError> {
        if amount < 1 {
            return Err(SkillError::Validation(format!(
                "amount must be positive, got {amount}"
            )));
        }

        let txn = self.store.conn.begin().await?;

        ReferenceRepository::new(&txn)
            .get_removable_skill(removable_skill_id)
            .await?
            .ok_or(SkillError::NotFound(removable_skill_id))?;

        let skills = RemovableSkillRepository::new(&txn);
        let row = skills
            .ensure_inventory(player_id, removable_skill_id)
            .await?;
        let total = row.amount + amount;
        let row = skills.set_inventory_amount(row, total).await?;
        let equipped = skills.total_equipped(player_id, removable_skill_id).await?;

        txn.commit().await?;

        Ok(RemovableSkillOwnedDto {
            removable_skill_id: row.removable_skill_id,
            total_amount: row.amount,
            equipped_amount: equipped as i64,
        })
    }

    async fn attach(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
        removable_skill_id: RemovableSkillId,
    ) -> Result<bool, SkillError> {
        let txn = self.store.conn.begin().await?;

        let unit = UnitRepository::new(&txn)
            .get_for_player(unit_owning_id, player_id)
            .await?
            .ok_or(SkillError::UnitNotFound(unit_owning_id))?;

        ReferenceRepository::new(&txn)
            .get_removable_skill(removable_skill_id)
            .await?
            .ok_or(SkillError::NotFound(removable_skill_id))?;

        let skills = RemovableSkillRepository::new(&txn);
        if skills
            .get_edge(unit_owning_id, removable_skill_id)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        let equipped_on_unit = skills.count_for_unit(unit_owning_id).await?;
        if equipped_on_unit >= unit.removable_skill_capacity as u64 {
            return Err(SkillError::Validation(format!(
                "unit {unit_owning_id} has no free skill slots"
            )));
        }

        let owned = skills
            .get_inventory(player_id, removable_skill_id)
            .await?
            .map_or(0, |row| row.amount);
        let in_use = skills.total_equipped(player_id, removable_skill_id).await?;
        if owned <= in_use as i64 {
            return Err(SkillError::Validation(format!(
                "no unequipped copy of skill {removable_skill_id} available"
            )));
        }

        skills
            .insert_edge(player_id, unit_owning_id, removable_skill_id)
            .await?;
        txn.commit().await?;

        Ok(true)
    }

    async fn detach(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
        removable_skill_id: RemovableSkillId,
    ) -> Result<bool, SkillError> {
        let txn = self.store.conn.begin().await?;

        UnitRepository::new(&txn)
            .get_for_player(unit_owning_id, player_id)
            .await?
            .ok_or(SkillError::UnitNotFound(unit_owning_id))?;

        let skills = RemovableSkillRepository::new(&txn);
        let Some(edge) = skills.get_edge(unit_owning_id, removable_skill_id).await? else {
            return Ok(false);
        };

        skills.delete_edge(edge).await?;
        txn.commit().await?;

        Ok(true)
    }

    async fn summary(&self, player_id: PlayerId) -> Result<RemovableSkillSummaryDto, SkillError> {
        let conn = &self.store.conn;
        let skills = RemovableSkillRepository::new(conn);

        let edges = skills.edges_for_player(player_id).await?;

        let mut equipped_counts = std::collections::HashMap::new();
        let mut by_unit: Vec<UnitAttachmentsDto> = Vec::new();
        for edge in &edges {
            *equipped_counts.entry(edge.removable_skill_id).or_insert(0i64) += 1;
            match by_unit
                .iter_mut()
                .find(|u| u.unit_owning_id == edge.unit_owning_id)
            {
                Some(unit) => unit.removable_skill_ids.push(edge.removable_skill_id),
                None => by_unit.push(UnitAttachmentsDto {
                    unit_owning_id: edge.unit_owning_id,
                    removable_skill_ids: vec![edge.removable_skill_id],
                }),
            }
        }

        let owned = skills
            .all_inventory(player_id)
            .await?
            .into_iter()
            .map(|row| RemovableSkillOwnedDto {
                equipped_amount: equipped_counts
                    .get(&row.removable_skill_id)
                    .copied()
                    .unwrap_or(0),
                removable_skill_id: row.removable_skill_id,
                total_amount: row.amount,
            })
            .collect();

        Ok(RemovableSkillSummaryDto {
            owned,
            equipped_by_unit: by_unit,
        })
    }
}
