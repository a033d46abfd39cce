use sea_orm::entity::prelude::*;

/// Per-template collection record. Flags only ever go from false to true
/// and `highest_love` only ever grows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "album_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub player_id: i64,
    pub unit_id: i32,
    pub rank_max_flag: bool,
    pub love_max_flag: bool,
    pub rank_level_max_flag: bool,
    pub sign_flag: bool,
    pub highest_love: i64,
    pub favorite_point: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Players,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
