use sea_orm::entity::prelude::*;

/// An owned unit. `unit_id` refers to the template in `unit_templates`;
/// `id` is the per-copy owning id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "units")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub player_id: i64,
    pub unit_id: i32,
    pub exp: i64,
    pub skill_exp: i64,
    pub rank: i32,
    pub display_rank: i32,
    pub max_level: i32,
    pub level_limit_id: i32,
    pub love: i64,
    pub removable_skill_capacity: i32,
    pub favorite: bool,
    pub is_signed: bool,
    pub active: bool,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Players,
    #[sea_orm(has_many = "super::unit_removable_skills::Entity")]
    UnitRemovableSkills,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl Related<super::unit_removable_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnitRemovableSkills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
