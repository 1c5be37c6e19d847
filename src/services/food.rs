use crate::{
    dto::food::FoodDto,
    errors::ServiceError,
    models::food::{Food, StockDirection},
    repositories::FoodRepository,
};
use dashmap::DashMap;
use metrics::counter;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{info, instrument, warn};

/// Stock engine for food records.
///
/// Registration, lookups and bounded quantity adjustments. Every
/// read-validate-write sequence on a record runs under that record's lock, so
/// concurrent adjustments of the same id are applied one after another.
#[derive(Clone)]
pub struct FoodService {
    repository: Arc<dyn FoodRepository>,
    record_locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
    registration_lock: Arc<Mutex<()>>,
}

impl FoodService {
    pub fn new(repository: Arc<dyn FoodRepository>) -> Self {
        Self {
            repository,
            record_locks: Arc::new(DashMap::new()),
            registration_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn repository(&self) -> &Arc<dyn FoodRepository> {
        &self.repository
    }

    async fn lock_record(&self, id: i64) -> OwnedMutexGuard<()> {
        let lock = self
            .record_locks
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Drops the lock entry for `id` unless another caller still holds or
    /// awaits it. Call only after the guard is released.
    fn prune_record_lock(&self, id: i64) {
        self.record_locks
            .remove_if(&id, |_, lock| Arc::strong_count(lock) == 1);
    }

    /// Registers a new food after validating the candidate and checking that
    /// its name is free.
    #[instrument(skip(self, candidate), fields(name = candidate.name.as_deref().unwrap_or_default()))]
    pub async fn register(&self, candidate: FoodDto) -> Result<Food, ServiceError> {
        let new_food = candidate.into_new_food()?;

        let _guard = self.registration_lock.lock().await;
        if self.repository.find_by_name(&new_food.name).await?.is_some() {
            warn!("food name already registered");
            return Err(ServiceError::AlreadyRegistered(new_food.name));
        }

        let food = self.repository.insert(new_food).await?;
        info!(id = food.id, "food registered");
        Ok(food)
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Food, ServiceError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::food_name_not_found(name))
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Food, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::food_id_not_found(id))
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Food>, ServiceError> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let guard = self.lock_record(id).await;
        let result = match self.find_by_id(id).await {
            Ok(_) => self.repository.delete_by_id(id).await,
            Err(err) => Err(err),
        };
        drop(guard);
        // The entry goes whether the record was deleted or never existed.
        if matches!(result, Ok(()) | Err(ServiceError::NotFound(_))) {
            self.prune_record_lock(id);
        }
        result?;
        info!("food deleted");
        Ok(())
    }

    /// Adds `amount` to the stock. Fails without changes when the result
    /// would exceed `max`.
    pub async fn increment(&self, id: i64, amount: i32) -> Result<Food, ServiceError> {
        self.adjust(id, amount, StockDirection::Increment).await
    }

    /// Removes `amount` from the stock. Fails without changes when the result
    /// would drop below zero.
    pub async fn decrement(&self, id: i64, amount: i32) -> Result<Food, ServiceError> {
        self.adjust(id, amount, StockDirection::Decrement).await
    }

    #[instrument(skip(self), fields(direction = direction.as_str()))]
    async fn adjust(
        &self,
        id: i64,
        amount: i32,
        direction: StockDirection,
    ) -> Result<Food, ServiceError> {
        let guard = self.lock_record(id).await;
        let mut food = match self.find_by_id(id).await {
            Ok(food) => food,
            Err(err) => {
                drop(guard);
                if matches!(err, ServiceError::NotFound(_)) {
                    self.prune_record_lock(id);
                }
                return Err(err);
            }
        };

        let Some(new_quantity) = direction.apply(food.quantity, amount, food.max) else {
            warn!(
                quantity = food.quantity,
                max = food.max,
                "stock adjustment out of bounds"
            );
            counter!("dogfood_stock.adjustment.rejected", 1, "direction" => direction.as_str());
            return Err(ServiceError::StockExceeded {
                id,
                quantity: amount,
            });
        };

        food.quantity = new_quantity;
        let food = self.repository.update(food).await?;
        info!(quantity = food.quantity, "stock adjusted");
        Ok(food)
    }
}
