//! `SeaORM` implementation of the `UnitService` trait.

use crate::api::types::{IdolizeResultDto, SupporterDto, UnitInfoDto};
use crate::db::Store;
use crate::db::repositories::unit::NewUnit;
use crate::db::repositories::{
    AlbumRepository, DeckRepository, PlayerRepository, ReferenceRepository,
    RemovableSkillRepository, UnitRepository,
};
use crate::domain::{AlbumFlags, PlayerId, UnitOwningId, UnitTemplateId};
use crate::entities::units;
use crate::progression::{self, BaseStats};
use crate::services::unit_service::{UnitError, UnitService};
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, Set, TransactionTrait};

/// Rarity tier whose members ship with the extended level-limit curve.
const LEVEL_LIMIT_RARITY: i32 = 4;
const DEFAULT_LEVEL_LIMIT_ID: i32 = 1;

pub struct SeaOrmUnitService {
    store: Store,
}

impl SeaOrmUnitService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

/// Derives the full read model for an owned unit from the reference tables.
///
/// Stats come from the template's level-up curve; once the unit has been
/// idolized past its rarity's cap and holds a level-limit pattern, that
/// extended curve takes over. Callers pass whatever connection they are
/// already on so this composes with transactions.
pub(crate) async fn build_unit_info<C: ConnectionTrait>(
    conn: &C,
    unit: &units::Model,
) -> Result<UnitInfoDto, UnitError> {
    let refs = ReferenceRepository::new(conn);

    let template = refs
        .get_template(unit.unit_id)
        .await?
        .ok_or_else(|| UnitError::Integrity(format!("template {} missing", unit.unit_id)))?;
    let rarity = refs
        .get_rarity(template.rarity)
        .await?
        .ok_or_else(|| UnitError::Integrity(format!("rarity {} missing", template.rarity)))?;

    let steps = refs
        .get_level_up_pattern(template.level_up_pattern_id)
        .await?;
    if steps.is_empty() {
        return Err(UnitError::Integrity(format!(
            "level-up pattern {} missing",
            template.level_up_pattern_id
        )));
    }

    let base = BaseStats {
        smile: template.smile_max,
        pure: template.pure_max,
        cool: template.cool_max,
        hp: template.hp_max,
    };
    let mut stats = progression::derive_level_stats(&steps, base, unit.exp);

    // Past the idolized cap the extended curve takes over, if the unit has
    // one and its cap was actually raised.
    if unit.level_limit_id > 0
        && stats.level >= rarity.after_level_max
        && unit.max_level > rarity.after_level_max
    {
        let limit_steps = refs.get_level_limit_pattern(unit.level_limit_id).await?;
        if !limit_steps.is_empty() {
            stats = progression::derive_level_stats(&limit_steps, base, unit.exp);
        }
    }

    let idolized = unit.rank == template.rank_max;

    // A non-idolized unit parked at its level cap has nothing to earn.
    let next_exp = if stats.level == rarity.before_level_max && !idolized {
        0
    } else {
        stats.next_exp
    };

    let skill = match template.default_skill_id {
        Some(skill_id) => refs.get_skill(skill_id).await?,
        None => None,
    };
    let (skill_level, _next) = match &skill {
        Some(skill) => {
            let skill_steps = refs
                .get_skill_pattern(skill.skill_level_up_pattern_id)
                .await?;
            progression::derive_skill_stats(Some(&skill_steps), unit.skill_exp)
        }
        None => progression::derive_skill_stats(None, unit.skill_exp),
    };
    let is_skill_level_max = skill
        .as_ref()
        .is_none_or(|skill| skill_level >= skill.max_level);

    let max_love = if idolized {
        rarity.after_love_max
    } else {
        rarity.before_love_max
    };

    Ok(UnitInfoDto {
        unit_owning_id: unit.id,
        unit_id: unit.unit_id,
        name: template.name,
        exp: unit.exp,
        next_exp,
        level: stats.level,
        max_level: unit.max_level,
        rank: unit.rank,
        max_rank: template.rank_max,
        display_rank: unit.display_rank,
        level_limit_id: unit.level_limit_id,
        love: unit.love,
        max_love,
        skill_level,
        skill_exp: unit.skill_exp,
        smile: stats.smile,
        pure: stats.pure,
        cool: stats.cool,
        hp: stats.hp,
        removable_skill_capacity: unit.removable_skill_capacity,
        favorite: unit.favorite,
        is_rank_max: idolized,
        is_love_max: unit.love >= rarity.after_love_max,
        is_level_max: stats.level >= rarity.after_level_max,
        is_signed: unit.is_signed,
        is_skill_level_max,
        is_removable_skill_capacity_max: unit.removable_skill_capacity
            == template.max_removable_skill_capacity,
        insert_date: unit.created_at.clone(),
    })
}

#[async_trait]
impl UnitService for SeaOrmUnitService {
    async fn acquire(
        &self,
        player_id: PlayerId,
        unit_id: UnitTemplateId,
    ) -> Result<UnitInfoDto, UnitError> {
        let txn = self.store.conn.begin().await?;

        let refs = ReferenceRepository::new(&txn);
        let template = refs
            .get_template(unit_id)
            .await?
            .ok_or(UnitError::TemplateNotFound(unit_id))?;

        // Support-only templates never join the collection; they read as
        // unknown here and stack via add_supporter instead.
        if template.disable_rank_up {
            return Err(UnitError::TemplateNotFound(unit_id));
        }

        let rarity = refs
            .get_rarity(template.rarity)
            .await?
            .ok_or_else(|| UnitError::Integrity(format!("rarity {} missing", template.rarity)))?;

        // Templates that start at max rank never idolize, so they begin on
        // the raised level cap.
        let max_level = if template.rank_min == template.rank_max {
            rarity.after_level_max
        } else {
            rarity.before_level_max
        };
        let level_limit_id = if template.rarity == LEVEL_LIMIT_RARITY {
            DEFAULT_LEVEL_LIMIT_ID
        } else {
            0
        };

        let unit = UnitRepository::new(&txn)
            .insert(NewUnit {
                player_id,
                unit_id,
                rank: template.rank_min,
                max_level,
                level_limit_id,
                removable_skill_capacity: template.default_removable_skill_capacity,
            })
            .await?;

        AlbumRepository::new(&txn)
            .update(
                player_id,
                unit_id,
                AlbumFlags {
                    rank_max: template.rank_min == template.rank_max,
                    ..Default::default()
                },
                0,
            )
            .await?;

        let info = build_unit_info(&txn, &unit).await?;
        txn.commit().await?;

        Ok(info)
    }

    async fn list_units(&self, player_id: PlayerId) -> Result<Vec<UnitInfoDto>, UnitError> {
        let units = UnitRepository::new(&self.store.conn)
            .all_for_player(player_id)
            .await?;

        let mut infos = Vec::with_capacity(units.len());
        for unit in &units {
            infos.push(build_unit_info(&self.store.conn, unit).await?);
        }

        Ok(infos)
    }

    async fn get_unit(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
    ) -> Result<UnitInfoDto, UnitError> {
        let unit = UnitRepository::new(&self.store.conn)
            .get_for_player(unit_owning_id, player_id)
            .await?
            .ok_or(UnitError::NotFound(unit_owning_id))?;

        build_unit_info(&self.store.conn, &unit).await
    }

    async fn dispose(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
    ) -> Result<(), UnitError> {
        let txn = self.store.conn.begin().await?;

        let units = UnitRepository::new(&txn);
        let unit = units
            .get_for_player(unit_owning_id, player_id)
            .await?
            .ok_or(UnitError::NotFound(unit_owning_id))?;

        // Slots and attachments go first so no row ever points at a unit
        // that is gone.
        DeckRepository::new(&txn)
            .delete_positions_for_unit(unit_owning_id)
            .await?;
        RemovableSkillRepository::new(&txn)
            .delete_edges_for_unit(unit_owning_id)
            .await?;

        let players = PlayerRepository::new(&txn);
        if let Some(player) = players.get(player_id).await? {
            if player.center_unit_owning_id == Some(unit_owning_id) {
                players.clear_center(player).await?;
            }
        }

        units.delete(unit).await?;
        txn.commit().await?;

        Ok(())
    }

    async fn idolize(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
    ) -> Result<IdolizeResultDto, UnitError> {
        let txn = self.store.conn.begin().await?;

        let units = UnitRepository::new(&txn);
        let unit = units
            .get_for_player(unit_owning_id, player_id)
            .await?
            .ok_or(UnitError::NotFound(unit_owning_id))?;

        let refs = ReferenceRepository::new(&txn);
        let template = refs
            .get_template(unit.unit_id)
            .await?
            .ok_or_else(|| UnitError::Integrity(format!("template {} missing", unit.unit_id)))?;
        let rarity = refs
            .get_rarity(template.rarity)
            .await?
            .ok_or_else(|| UnitError::Integrity(format!("rarity {} missing", template.rarity)))?;

        if unit.rank >= template.rank_max {
            let info = build_unit_info(&txn, &unit).await?;
            txn.commit().await?;
            return Ok(IdolizeResultDto {
                changed: false,
                unit: info,
            });
        }

        let mut active: units::ActiveModel = unit.into();
        active.rank = Set(template.rank_max);
        active.display_rank = Set(template.rank_max);
        active.max_level = Set(rarity.after_level_max);
        let unit = units.update(active).await?;

        AlbumRepository::new(&txn)
            .update(
                player_id,
                unit.unit_id,
                AlbumFlags {
                    rank_max: true,
                    ..Default::default()
                },
                unit.love,
            )
            .await?;

        let info = build_unit_info(&txn, &unit).await?;
        txn.commit().await?;

        Ok(IdolizeResultDto {
            changed: true,
            unit: info,
        })
    }

    async fn set_center(
        &self,
        player_id: PlayerId,
        unit_owning_id: UnitOwningId,
    ) -> Result<(), UnitError> {
        let units = UnitRepository::new(&self.store.conn);
        units
            .get_for_player(unit_owning_id, player_id)
            .await?
            .ok_or(UnitError::NotFound(unit_owning_id))?;

        let players = PlayerRepository::new(&self.store.conn);
        let player = players
            .get(player_id)
            .await?
            .ok_or_else(|| UnitError::Validation(format!("player {player_id} not found")))?;
        players.set_center(player, unit_owning_id).await?;

        Ok(())
    }

    async fn add_supporter(
        &self,
        player_id: PlayerId,
        unit_id: UnitTemplateId,
        quantity: i64,
    ) -> Result<SupporterDto, UnitError> {
        if quantity < 1 {
            return Err(UnitError::Validation(format!(
                "quantity must be positive, got {quantity}"
            )));
        }

        let txn = self.store.conn.begin().await?;

        let template = ReferenceRepository::new(&txn)
            .get_template(unit_id)
            .await?
            .ok_or(UnitError::TemplateNotFound(unit_id))?;
        if !template.disable_rank_up {
            return Err(UnitError::Validation(format!(
                "unit template {unit_id} is not a supporter"
            )));
        }

        let units = UnitRepository::new(&txn);
        let row = units.ensure_supporter(player_id, unit_id).await?;
        let amount = row.amount + quantity;
        let row = units.set_supporter_amount(row, amount).await?;

        AlbumRepository::new(&txn)
            .update(
                player_id,
                unit_id,
                AlbumFlags {
                    rank_max: true,
                    love_max: true,
                    rank_level_max: true,
                    signed: false,
                },
                0,
            )
            .await?;

        txn.commit().await?;
        Ok(row.into())
    }

    async fn sub_supporter(
        &self,
        player_id: PlayerId,
        unit_id: UnitTemplateId,
        quantity: i64,
    ) -> Result<(bool, SupporterDto), UnitError> {
        if quantity < 1 {
            return Err(UnitError::Validation(format!(
                "quantity must be positive, got {quantity}"
            )));
        }

        let txn = self.store.conn.begin().await?;

        let units = UnitRepository::new(&txn);
        let Some(row) = units.get_supporter(player_id, unit_id).await? else {
            return Ok((
                false,
                SupporterDto {
                    unit_id,
                    amount: 0,
                },
            ));
        };

        if row.amount < quantity {
            return Ok((false, row.into()));
        }

        let amount = row.amount - quantity;
        let row = units.set_supporter_amount(row, amount).await?;
        txn.commit().await?;

        Ok((true, row.into()))
    }

    async fn list_supporters(&self, player_id: PlayerId) -> Result<Vec<SupporterDto>, UnitError> {
        let rows = UnitRepository::new(&self.store.conn)
            .all_supporters(player_id)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_units(&self, player_id: PlayerId) -> Result<u64, UnitError> {
        Ok(UnitRepository::new(&self.store.conn)
            .count_for_player(player_id)
            .await?)
    }
}
