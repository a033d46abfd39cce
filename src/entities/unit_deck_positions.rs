use sea_orm::entity::prelude::*;

/// One filled slot of a deck. `position` is 0-based within the 9 slots;
/// empty slots simply have no row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "unit_deck_positions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub deck_id: i64,
    pub position: i32,
    pub unit_owning_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::unit_decks::Entity",
        from = "Column::DeckId",
        to = "super::unit_decks::Column::Id"
    )]
    UnitDecks,
}

impl Related<super::unit_decks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnitDecks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
