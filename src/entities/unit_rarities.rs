use sea_orm::entity::prelude::*;

/// Level and bond caps per rarity tier, before and after idolization.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "unit_rarities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rarity: i32,
    pub before_level_max: i32,
    pub after_level_max: i32,
    pub before_love_max: i64,
    pub after_love_max: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
