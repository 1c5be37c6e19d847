mod common;

use std::sync::Arc;

use common::sqlite_repository;
use dogfood_api::{
    dto::food::FoodDto,
    models::food::FoodType,
    repositories::{FoodRepository, InMemoryFoodRepository},
    services::FoodService,
};

fn candidate(name: &str) -> FoodDto {
    FoodDto {
        id: None,
        name: Some(name.to_string()),
        brand: Some("Mars".to_string()),
        max: Some(50),
        quantity: Some(10),
        food_type: Some(FoodType::Premium),
    }
}

async fn race_increments(repository: Arc<dyn FoodRepository>) {
    let svc = FoodService::new(repository);
    let food = svc.register(candidate("Magnus PREMIUM")).await.expect("seed");

    // 60 concurrent increments of 1 unit with room for 40, expect only 40 successes
    let mut tasks = vec![];
    for _ in 0..60 {
        let svc = svc.clone();
        let id = food.id;
        tasks.push(tokio::spawn(async move { svc.increment(id, 1).await.is_ok() }));
    }
    let mut success = 0;
    for t in tasks {
        if t.await.unwrap_or(false) {
            success += 1;
        }
    }
    assert_eq!(
        success, 40,
        "exactly 40 increments should succeed; got {}",
        success
    );

    let stored = svc.find_by_id(food.id).await.expect("reload");
    assert_eq!(stored.quantity, 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_increments_never_exceed_max_in_memory() {
    race_increments(Arc::new(InMemoryFoodRepository::new())).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_increments_never_exceed_max_sqlite() {
    race_increments(sqlite_repository().await).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn mixed_adjustments_keep_quantity_in_bounds() {
    let svc = FoodService::new(Arc::new(InMemoryFoodRepository::new()));
    let food = svc.register(candidate("Golden")).await.expect("seed");

    let mut tasks = vec![];
    for i in 0..100 {
        let svc = svc.clone();
        let id = food.id;
        tasks.push(tokio::spawn(async move {
            if i % 2 == 0 {
                svc.increment(id, 7).await.map(|f| f.quantity)
            } else {
                svc.decrement(id, 5).await.map(|f| f.quantity)
            }
        }));
    }
    for t in tasks {
        if let Ok(quantity) = t.await.expect("task panicked") {
            assert!((0..=50).contains(&quantity));
        }
    }

    let stored = svc.find_by_id(food.id).await.expect("reload");
    assert!((0..=50).contains(&stored.quantity));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registration_of_one_name_admits_one() {
    let svc = FoodService::new(Arc::new(InMemoryFoodRepository::new()));

    let mut tasks = vec![];
    for _ in 0..16 {
        let svc = svc.clone();
        tasks.push(tokio::spawn(async move {
            svc.register(candidate("Magnus PREMIUM")).await.is_ok()
        }));
    }
    let mut success = 0;
    for t in tasks {
        if t.await.unwrap_or(false) {
            success += 1;
        }
    }
    assert_eq!(success, 1);
    assert_eq!(svc.list_all().await.expect("list").len(), 1);
}
