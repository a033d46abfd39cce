use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub locale: String,
    pub center_unit_owning_id: Option<i64>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::units::Entity")]
    Units,
    #[sea_orm(has_many = "super::unit_decks::Entity")]
    UnitDecks,
    #[sea_orm(has_many = "super::album_entries::Entity")]
    AlbumEntries,
}

impl Related<super::units::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Units.def()
    }
}

impl Related<super::unit_decks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnitDecks.def()
    }
}

impl Related<super::album_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AlbumEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
