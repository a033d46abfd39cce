use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "unit_decks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub player_id: i64,
    pub deck_number: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Players,
    #[sea_orm(has_many = "super::unit_deck_positions::Entity")]
    UnitDeckPositions,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl Related<super::unit_deck_positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnitDeckPositions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
