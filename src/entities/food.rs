use crate::models::food::{Food, FoodType, NewFood};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// Food stock keeping unit
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    /// Store-assigned primary key
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Unique, case-sensitive name
    #[sea_orm(unique)]
    pub name: String,

    pub brand: String,

    /// Stock capacity
    pub max: i32,

    /// Current stock, always within `0..=max`
    pub quantity: i32,

    #[sea_orm(column_name = "type")]
    pub food_type: FoodType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Food {
    fn from(model: Model) -> Self {
        Food {
            id: model.id,
            name: model.name,
            brand: model.brand,
            max: model.max,
            quantity: model.quantity,
            food_type: model.food_type,
        }
    }
}

impl From<NewFood> for ActiveModel {
    fn from(food: NewFood) -> Self {
        ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(food.name),
            brand: Set(food.brand),
            max: Set(food.max),
            quantity: Set(food.quantity),
            food_type: Set(food.food_type),
        }
    }
}

impl From<Food> for ActiveModel {
    fn from(food: Food) -> Self {
        ActiveModel {
            id: Set(food.id),
            name: Set(food.name),
            brand: Set(food.brand),
            max: Set(food.max),
            quantity: Set(food.quantity),
            food_type: Set(food.food_type),
        }
    }
}
