use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "nutrients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub unit: String,
    pub category_id: Uuid,
    pub daily_value: Option<f64>,
    pub display_order: i32,
    pub is_mandatory: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::nutrient_categories::Entity",
        from = "Column::CategoryId",
        to = "super::nutrient_categories::Column::Id"
    )]
    NutrientCategories,
    #[sea_orm(has_many = "super::ingredient_nutrients::Entity")]
    IngredientNutrients,
}

impl Related<super::nutrient_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NutrientCategories.def()
    }
}

impl Related<super::ingredient_nutrients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IngredientNutrients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
