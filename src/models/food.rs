use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Food category. Serialized and stored as the upper-case variant name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodType {
    #[sea_orm(string_value = "PREMIUM")]
    Premium,
    #[sea_orm(string_value = "STANDARD")]
    Standard,
    #[sea_orm(string_value = "SUPER_PREMIUM")]
    SuperPremium,
    #[sea_orm(string_value = "NATURALIS")]
    Naturalis,
}

impl FoodType {
    /// Display label shown to people.
    pub fn description(&self) -> &'static str {
        match self {
            FoodType::Premium => "Premium",
            FoodType::Standard => "Standard",
            FoodType::SuperPremium => "Super Premium",
            FoodType::Naturalis => "Naturalis",
        }
    }
}

impl std::fmt::Display for FoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A persisted food record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub food_type: FoodType,
}

/// A validated candidate that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFood {
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub food_type: FoodType,
}

impl NewFood {
    pub fn with_id(self, id: i64) -> Food {
        Food {
            id,
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            food_type: self.food_type,
        }
    }
}

/// Which way a stock adjustment moves the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    Increment,
    Decrement,
}

impl StockDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockDirection::Increment => "increment",
            StockDirection::Decrement => "decrement",
        }
    }

    /// Candidate quantity after moving `amount` in this direction, or `None`
    /// when it falls outside `0..=max` (including on overflow).
    pub fn apply(&self, quantity: i32, amount: i32, max: i32) -> Option<i32> {
        match self {
            StockDirection::Increment => quantity.checked_add(amount).filter(|q| *q <= max),
            StockDirection::Decrement => quantity.checked_sub(amount).filter(|q| *q >= 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StockDirection::Increment, 10, 40, 50, Some(50))]
    #[case(StockDirection::Increment, 10, 45, 50, None)]
    #[case(StockDirection::Increment, 10, 80, 50, None)]
    #[case(StockDirection::Increment, 10, 0, 50, Some(10))]
    #[case(StockDirection::Decrement, 10, 10, 50, Some(0))]
    #[case(StockDirection::Decrement, 10, 11, 50, None)]
    #[case(StockDirection::Decrement, 10, 80, 50, None)]
    #[case(StockDirection::Increment, i32::MAX, 1, i32::MAX, None)]
    #[case(StockDirection::Decrement, 0, i32::MIN, 50, None)]
    fn apply_checks_single_sided_bound(
        #[case] direction: StockDirection,
        #[case] quantity: i32,
        #[case] amount: i32,
        #[case] max: i32,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(direction.apply(quantity, amount, max), expected);
    }

    #[test]
    fn food_type_serializes_as_variant_name() {
        assert_eq!(
            serde_json::to_string(&FoodType::SuperPremium).unwrap(),
            "\"SUPER_PREMIUM\""
        );
        let parsed: FoodType = serde_json::from_str("\"NATURALIS\"").unwrap();
        assert_eq!(parsed, FoodType::Naturalis);
        assert_eq!(FoodType::SuperPremium.description(), "Super Premium");
    }
}
