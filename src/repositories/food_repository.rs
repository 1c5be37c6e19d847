use super::FoodRepository;
use crate::entities::food::{self, Entity as FoodEntity};
use crate::errors::ServiceError;
use crate::models::food::{Food, NewFood};
use async_trait::async_trait;
use metrics::counter;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};
use std::sync::Arc;
use tracing::{debug, error};

/// Food records in the `foods` table.
#[derive(Debug, Clone)]
pub struct SeaOrmFoodRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFoodRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn db_error(operation: &'static str, err: DbErr) -> ServiceError {
    error!(operation, error = %err, "food repository query failed");
    counter!("dogfood_db.query.error", 1);
    ServiceError::DatabaseError(err)
}

#[async_trait]
impl FoodRepository for SeaOrmFoodRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Food>, ServiceError> {
        let model = FoodEntity::find_by_id(id)
            .one(self.get_db())
            .await
            .map_err(|e| db_error("find_by_id", e))?;
        Ok(model.map(Food::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Food>, ServiceError> {
        let model = FoodEntity::find()
            .filter(food::Column::Name.eq(name))
            .one(self.get_db())
            .await
            .map_err(|e| db_error("find_by_name", e))?;
        Ok(model.map(Food::from))
    }

    async fn insert(&self, new_food: NewFood) -> Result<Food, ServiceError> {
        let name = new_food.name.clone();
        let active: food::ActiveModel = new_food.into();
        match active.insert(self.get_db()).await {
            Ok(model) => {
                debug!(id = model.id, "inserted food");
                Ok(model.into())
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(ServiceError::AlreadyRegistered(name))
                }
                _ => Err(db_error("insert", err)),
            },
        }
    }

    async fn update(&self, food: Food) -> Result<Food, ServiceError> {
        let id = food.id;
        let active: food::ActiveModel = food.into();
        match active.update(self.get_db()).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => Err(ServiceError::food_id_not_found(id)),
            Err(err) => Err(db_error("update", err)),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let result = FoodEntity::delete_by_id(id)
            .exec(self.get_db())
            .await
            .map_err(|e| db_error("delete_by_id", e))?;
        if result.rows_affected == 0 {
            return Err(ServiceError::food_id_not_found(id));
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Food>, ServiceError> {
        let models = FoodEntity::find()
            .order_by_asc(food::Column::Id)
            .all(self.get_db())
            .await
            .map_err(|e| db_error("find_all", e))?;
        Ok(models.into_iter().map(Food::from).collect())
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        crate::db::check_connection(self.get_db()).await
    }
}
