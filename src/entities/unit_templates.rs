use sea_orm::entity::prelude::*;

/// Static definition of a unit. Seeded reference data, never mutated by
/// gameplay.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "unit_templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub unit_id: i32,
    pub name: String,
    pub rarity: i32,
    pub rank_min: i32,
    pub rank_max: i32,
    pub smile_max: i32,
    pub pure_max: i32,
    pub cool_max: i32,
    pub hp_max: i32,
    pub default_skill_id: Option<i32>,
    pub default_removable_skill_capacity: i32,
    pub max_removable_skill_capacity: i32,
    pub level_up_pattern_id: i32,
    pub album_series_id: Option<i32>,
    pub disable_rank_up: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
