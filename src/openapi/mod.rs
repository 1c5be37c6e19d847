use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dog Food Inventory API",
        version = "1.0.0",
        description = r#"
# Dog Food Inventory API

Registers dog food products and keeps their stock between zero and each
product's maximum capacity.

## Error Handling

Every failure returns the same body:

```json
{
  "error": "Bad Request",
  "message": "Food with name Magnus PREMIUM already registered in the system.",
  "request_id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "foods", description = "Food registration and stock management")
    ),
    paths(
        crate::handlers::foods::create_food,
        crate::handlers::foods::get_food_by_name,
        crate::handlers::foods::list_foods,
        crate::handlers::foods::delete_food,
        crate::handlers::foods::increment_stock,
        crate::handlers::foods::decrement_stock,
    ),
    components(
        schemas(
            crate::dto::food::FoodDto,
            crate::dto::food::QuantityDto,
            crate::models::food::FoodType,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
