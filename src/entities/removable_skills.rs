use sea_orm::entity::prelude::*;

/// Static definition of a removable (school idol) skill.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "removable_skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub skill_id: i32,
    pub name: String,
    pub effect_type: i32,
    pub effect_value: f64,
    pub fixed_value: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
