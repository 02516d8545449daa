use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "nutrient_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::nutrients::Entity")]
    Nutrients,
}

impl Related<super::nutrients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Nutrients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
