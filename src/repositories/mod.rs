use crate::errors::ServiceError;
use crate::models::food::{Food, NewFood};
use async_trait::async_trait;

pub mod food_repository;
pub mod in_memory;

pub use food_repository::SeaOrmFoodRepository;
pub use in_memory::InMemoryFoodRepository;

/// Keyed storage for food records.
///
/// Implementations own all persisted state; callers hold records only for the
/// duration of a single operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Food>, ServiceError>;

    /// Case-sensitive exact match.
    async fn find_by_name(&self, name: &str) -> Result<Option<Food>, ServiceError>;

    /// Persists a new record and returns it with its assigned id. A name that
    /// is already taken yields `ServiceError::AlreadyRegistered`.
    async fn insert(&self, food: NewFood) -> Result<Food, ServiceError>;

    /// Overwrites an existing record.
    async fn update(&self, food: Food) -> Result<Food, ServiceError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;

    /// All records in ascending id order.
    async fn find_all(&self) -> Result<Vec<Food>, ServiceError>;

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), ServiceError>;
}
