use sea_orm::entity::prelude::*;

/// Extended curve applied once a unit levels past its rarity's idolized cap.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "unit_level_limit_patterns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub level_limit_id: i32,
    pub level: i32,
    pub next_exp: i64,
    pub smile_diff: i32,
    pub pure_diff: i32,
    pub cool_diff: i32,
    pub hp_diff: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
