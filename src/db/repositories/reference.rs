use crate::entities::{
    prelude::*, removable_skills, unit_level_limit_patterns, unit_level_up_patterns,
    unit_rarities, unit_skill_level_up_patterns, unit_skills, unit_templates,
};
use crate::progression::{LevelStep, SkillStep};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Read-only access to the seeded reference tables (templates, rarities,
/// experience curves, skill definitions).
pub struct ReferenceRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ReferenceRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn get_template(
        &self,
        unit_id: i32,
    ) -> Result<Option<unit_templates::Model>, DbErr> {
        UnitTemplates::find_by_id(unit_id).one(self.conn).await
    }

    pub async fn get_rarity(&self, rarity: i32) -> Result<Option<unit_rarities::Model>, DbErr> {
        UnitRarities::find_by_id(rarity).one(self.conn).await
    }

    /// Level-up curve for `pattern_id`, ascending by level.
    pub async fn get_level_up_pattern(&self, pattern_id: i32) -> Result<Vec<LevelStep>, DbErr> {
        let rows = UnitLevelUpPatterns::find()
            .filter(unit_level_up_patterns::Column::PatternId.eq(pattern_id))
            .order_by_asc(unit_level_up_patterns::Column::Level)
            .all(self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|m| LevelStep {
                level: m.level,
                next_exp: m.next_exp,
                smile_diff: m.smile_diff,
                pure_diff: m.pure_diff,
                cool_diff: m.cool_diff,
                hp_diff: m.hp_diff,
            })
            .collect())
    }

    /// Extended curve used past the idolized level cap, ascending by level.
    pub async fn get_level_limit_pattern(
        &self,
        level_limit_id: i32,
    ) -> Result<Vec<LevelStep>, DbErr> {
        let rows = UnitLevelLimitPatterns::find()
            .filter(unit_level_limit_patterns::Column::LevelLimitId.eq(level_limit_id))
            .order_by_asc(unit_level_limit_patterns::Column::Level)
            .all(self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|m| LevelStep {
                level: m.level,
                next_exp: m.next_exp,
                smile_diff: m.smile_diff,
                pure_diff: m.pure_diff,
                cool_diff: m.cool_diff,
                hp_diff: m.hp_diff,
            })
            .collect())
    }

    pub async fn get_skill(&self, skill_id: i32) -> Result<Option<unit_skills::Model>, DbErr> {
        UnitSkills::find_by_id(skill_id).one(self.conn).await
    }

    pub async fn get_skill_pattern(&self, pattern_id: i32) -> Result<Vec<SkillStep>, DbErr> {
        let rows = UnitSkillLevelUpPatterns::find()
            .filter(unit_skill_level_up_patterns::Column::PatternId.eq(pattern_id))
            .order_by_asc(unit_skill_level_up_patterns::Column::SkillLevel)
            .all(self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|m| SkillStep {
                skill_level: m.skill_level,
                next_exp: m.next_exp,
            })
            .collect())
    }

    pub async fn get_removable_skill(
        &self,
        skill_id: i32,
    ) -> Result<Option<removable_skills::Model>, DbErr> {
        RemovableSkills::find_by_id(skill_id).one(self.conn).await
    }
}
