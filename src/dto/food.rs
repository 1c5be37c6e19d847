use crate::errors::ServiceError;
use crate::models::food::{Food, FoodType, NewFood};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Food record as exchanged over HTTP.
///
/// Fields are optional on the wire so that a missing field surfaces as a
/// validation failure (400) rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_quantity_within_max", skip_on_field_errors = true))]
#[schema(example = json!({
    "id": 1,
    "name": "Magnus PREMIUM",
    "brand": "Mars",
    "max": 50,
    "quantity": 10,
    "type": "PREMIUM"
}))]
pub struct FoodDto {
    /// Assigned by the store; ignored on registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[validate(required, length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, max = 100))]
    pub brand: Option<String>,

    #[validate(required, range(min = 0))]
    pub max: Option<i32>,

    #[validate(required, range(min = 0))]
    pub quantity: Option<i32>,

    #[serde(rename = "type")]
    #[validate(required)]
    pub food_type: Option<FoodType>,
}

fn validate_quantity_within_max(dto: &FoodDto) -> Result<(), ValidationError> {
    match (dto.quantity, dto.max) {
        (Some(quantity), Some(max)) if quantity > max => {
            let mut err = ValidationError::new("quantity_exceeds_max");
            err.message = Some("quantity must not exceed max".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

impl FoodDto {
    /// Validates the candidate and turns it into a record without an id.
    pub fn into_new_food(self) -> Result<NewFood, ServiceError> {
        self.validate()?;

        let missing = |field: &str| ServiceError::ValidationError(format!("{field}: required"));
        Ok(NewFood {
            name: self.name.ok_or_else(|| missing("name"))?,
            brand: self.brand.ok_or_else(|| missing("brand"))?,
            max: self.max.ok_or_else(|| missing("max"))?,
            quantity: self.quantity.ok_or_else(|| missing("quantity"))?,
            food_type: self.food_type.ok_or_else(|| missing("type"))?,
        })
    }
}

impl From<Food> for FoodDto {
    fn from(food: Food) -> Self {
        Self {
            id: Some(food.id),
            name: Some(food.name),
            brand: Some(food.brand),
            max: Some(food.max),
            quantity: Some(food.quantity),
            food_type: Some(food.food_type),
        }
    }
}

/// Body of the increment and decrement endpoints. A single adjustment may move
/// at most 100 units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({ "quantity": 10 }))]
pub struct QuantityDto {
    #[validate(required, range(min = 0, max = 100))]
    pub quantity: Option<i32>,
}

impl QuantityDto {
    pub fn amount(&self) -> Result<i32, ServiceError> {
        self.validate()?;
        self.quantity
            .ok_or_else(|| ServiceError::ValidationError("quantity: required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn magnus() -> FoodDto {
        FoodDto {
            id: None,
            name: Some("Magnus PREMIUM".into()),
            brand: Some("Mars".into()),
            max: Some(50),
            quantity: Some(10),
            food_type: Some(FoodType::Premium),
        }
    }

    #[test]
    fn valid_candidate_becomes_new_food() {
        let food = magnus().into_new_food().unwrap();
        assert_eq!(food.name, "Magnus PREMIUM");
        assert_eq!(food.max, 50);
        assert_eq!(food.food_type, FoodType::Premium);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let mut dto = magnus();
        dto.brand = None;
        assert_matches!(dto.into_new_food(), Err(ServiceError::ValidationError(_)));

        let mut dto = magnus();
        dto.food_type = None;
        assert_matches!(dto.into_new_food(), Err(ServiceError::ValidationError(_)));
    }

    #[test]
    fn empty_and_overlong_names_are_rejected() {
        let mut dto = magnus();
        dto.name = Some(String::new());
        assert!(dto.validate().is_err());

        let mut dto = magnus();
        dto.name = Some("x".repeat(201));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn quantity_above_max_is_rejected() {
        let mut dto = magnus();
        dto.quantity = Some(51);
        assert_matches!(dto.into_new_food(), Err(ServiceError::ValidationError(_)));
    }

    #[test]
    fn negative_values_are_rejected() {
        let mut dto = magnus();
        dto.max = Some(-1);
        assert!(dto.validate().is_err());

        let mut dto = magnus();
        dto.quantity = Some(-1);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn serializes_type_field_as_variant_name() {
        let json = serde_json::to_value(FoodDto::from(magnus().into_new_food().unwrap().with_id(1)))
            .unwrap();
        assert_eq!(json["type"], "PREMIUM");
        assert_eq!(json["id"], 1);
        assert_eq!(json["quantity"], 10);
    }

    #[test]
    fn quantity_amount_is_bounded() {
        assert_eq!(QuantityDto { quantity: Some(100) }.amount().unwrap(), 100);
        assert_eq!(QuantityDto { quantity: Some(0) }.amount().unwrap(), 0);
        assert_matches!(
            QuantityDto { quantity: Some(101) }.amount(),
            Err(ServiceError::ValidationError(_))
        );
        assert_matches!(
            QuantityDto { quantity: Some(-1) }.amount(),
            Err(ServiceError::ValidationError(_))
        );
        assert_matches!(
            QuantityDto { quantity: None }.amount(),
            Err(ServiceError::ValidationError(_))
        );
    }
}
