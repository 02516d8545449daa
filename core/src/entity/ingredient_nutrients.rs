use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredient_nutrients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ingredient_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub nutrient_id: Uuid,
    pub value_per_100g: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ingredients::Entity",
        from = "Column::IngredientId",
        to = "super::ingredients::Column::Id"
    )]
    Ingredients,
    #[sea_orm(
        belongs_to = "super::nutrients::Entity",
        from = "Column::NutrientId",
        to = "super::nutrients::Column::Id"
    )]
    Nutrients,
}

impl Related<super::ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredients.def()
    }
}

impl Related<super::nutrients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Nutrients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
