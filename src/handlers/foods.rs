use crate::{
    dto::food::{FoodDto, QuantityDto},
    errors::ServiceError,
    handlers::common::{
        created_response, json_rejection, no_content_response, path_rejection, success_response,
    },
    services::food::FoodService,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    response::Response,
    routing::{get, patch},
    Router,
};

/// Gives handlers access to the food service
pub trait FoodHandlerState: Clone + Send + Sync + 'static {
    fn food_service(&self) -> &FoodService;
}

/// Create the foods router, mounted at `/foods`.
///
/// Lookup by name and deletion by id share one path segment.
pub fn foods_router<S>() -> Router<S>
where
    S: FoodHandlerState,
{
    Router::new()
        .route("/", get(list_foods::<S>).post(create_food::<S>))
        .route(
            "/:key",
            get(get_food_by_name::<S>).delete(delete_food::<S>),
        )
        .route("/:key/increment", patch(increment_stock::<S>))
        .route("/:key/decrement", patch(decrement_stock::<S>))
}

/// Register a new food
#[utoipa::path(
    post,
    path = "/api/v1/foods",
    request_body = FoodDto,
    responses(
        (status = 201, description = "Food registered", body = FoodDto),
        (status = 400, description = "Missing or invalid field, or name already registered", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "foods"
)]
pub async fn create_food<S>(
    State(state): State<S>,
    payload: Result<Json<FoodDto>, JsonRejection>,
) -> Result<Response, ServiceError>
where
    S: FoodHandlerState,
{
    let Json(candidate) = payload.map_err(json_rejection)?;
    let food = state.food_service().register(candidate).await?;
    Ok(created_response(FoodDto::from(food)))
}

/// Find a food by its name
#[utoipa::path(
    get,
    path = "/api/v1/foods/{name}",
    params(("name" = String, Path, description = "Exact, case-sensitive food name")),
    responses(
        (status = 200, description = "Food found", body = FoodDto),
        (status = 404, description = "No food with this name", body = crate::errors::ErrorResponse)
    ),
    tag = "foods"
)]
pub async fn get_food_by_name<S>(
    State(state): State<S>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Response, ServiceError>
where
    S: FoodHandlerState,
{
    let Path(name) = name.map_err(path_rejection)?;
    let food = state.food_service().find_by_name(&name).await?;
    Ok(success_response(FoodDto::from(food)))
}

/// List all registered foods
#[utoipa::path(
    get,
    path = "/api/v1/foods",
    responses(
        (status = 200, description = "All registered foods", body = [FoodDto])
    ),
    tag = "foods"
)]
pub async fn list_foods<S>(State(state): State<S>) -> Result<Response, ServiceError>
where
    S: FoodHandlerState,
{
    let foods = state.food_service().list_all().await?;
    Ok(success_response(
        foods.into_iter().map(FoodDto::from).collect::<Vec<_>>(),
    ))
}

/// Delete a food by id
#[utoipa::path(
    delete,
    path = "/api/v1/foods/{id}",
    params(("id" = i64, Path, description = "Food id")),
    responses(
        (status = 204, description = "Food deleted"),
        (status = 400, description = "Id is not an integer", body = crate::errors::ErrorResponse),
        (status = 404, description = "No food with this id", body = crate::errors::ErrorResponse)
    ),
    tag = "foods"
)]
pub async fn delete_food<S>(
    State(state): State<S>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ServiceError>
where
    S: FoodHandlerState,
{
    let Path(id) = id.map_err(path_rejection)?;
    state.food_service().delete_by_id(id).await?;
    Ok(no_content_response())
}

/// Add stock to a food
#[utoipa::path(
    patch,
    path = "/api/v1/foods/{id}/increment",
    params(("id" = i64, Path, description = "Food id")),
    request_body = QuantityDto,
    responses(
        (status = 200, description = "Stock incremented", body = FoodDto),
        (status = 400, description = "Invalid amount or max stock capacity exceeded", body = crate::errors::ErrorResponse),
        (status = 404, description = "No food with this id", body = crate::errors::ErrorResponse)
    ),
    tag = "foods"
)]
pub async fn increment_stock<S>(
    State(state): State<S>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<QuantityDto>, JsonRejection>,
) -> Result<Response, ServiceError>
where
    S: FoodHandlerState,
{
    let Path(id) = id.map_err(path_rejection)?;
    let Json(body) = payload.map_err(json_rejection)?;
    let food = state.food_service().increment(id, body.amount()?).await?;
    Ok(success_response(FoodDto::from(food)))
}

/// Remove stock from a food
#[utoipa::path(
    patch,
    path = "/api/v1/foods/{id}/decrement",
    params(("id" = i64, Path, description = "Food id")),
    request_body = QuantityDto,
    responses(
        (status = 200, description = "Stock decremented", body = FoodDto),
        (status = 400, description = "Invalid amount or stock would drop below zero", body = crate::errors::ErrorResponse),
        (status = 404, description = "No food with this id", body = crate::errors::ErrorResponse)
    ),
    tag = "foods"
)]
pub async fn decrement_stock<S>(
    State(state): State<S>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<QuantityDto>, JsonRejection>,
) -> Result<Response, ServiceError>
where
    S: FoodHandlerState,
{
    let Path(id) = id.map_err(path_rejection)?;
    let Json(body) = payload.map_err(json_rejection)?;
    let food = state.food_service().decrement(id, body.amount()?).await?;
    Ok(success_response(FoodDto::from(food)))
}
