use super::FoodRepository;
use crate::errors::ServiceError;
use crate::models::food::{Food, NewFood};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Process-local food store for tests and local runs.
///
/// Ids start at 1 and are never reused. Name uniqueness is enforced on insert
/// the same way the database's unique index does.
#[derive(Debug)]
pub struct InMemoryFoodRepository {
    inner: RwLock<Store>,
}

#[derive(Debug)]
struct Store {
    next_id: i64,
    foods: BTreeMap<i64, Food>,
}

impl Default for InMemoryFoodRepository {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Store {
                next_id: 1,
                foods: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryFoodRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Store>, ServiceError> {
        self.inner
            .read()
            .map_err(|_| ServiceError::InternalError("food store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Store>, ServiceError> {
        self.inner
            .write()
            .map_err(|_| ServiceError::InternalError("food store lock poisoned".to_string()))
    }
}

#[async_trait]
impl FoodRepository for InMemoryFoodRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Food>, ServiceError> {
        Ok(self.read()?.foods.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Food>, ServiceError> {
        Ok(self
            .read()?
            .foods
            .values()
            .find(|food| food.name == name)
            .cloned())
    }

    async fn insert(&self, new_food: NewFood) -> Result<Food, ServiceError> {
        let mut store = self.write()?;
        if store.foods.values().any(|food| food.name == new_food.name) {
            return Err(ServiceError::AlreadyRegistered(new_food.name));
        }
        let id = store.next_id;
        store.next_id += 1;
        let food = new_food.with_id(id);
        store.foods.insert(id, food.clone());
        Ok(food)
    }

    async fn update(&self, food: Food) -> Result<Food, ServiceError> {
        let mut store = self.write()?;
        match store.foods.get_mut(&food.id) {
            Some(existing) => {
                *existing = food.clone();
                Ok(food)
            }
            None => Err(ServiceError::food_id_not_found(food.id)),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.write()?
            .foods
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ServiceError::food_id_not_found(id))
    }

    async fn find_all(&self) -> Result<Vec<Food>, ServiceError> {
        Ok(self.read()?.foods.values().cloned().collect())
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        self.read().map(|_| ())
    }
}
