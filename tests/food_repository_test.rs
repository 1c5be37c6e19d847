mod common;

use assert_matches::assert_matches;
use common::sqlite_repository;
use dogfood_api::{
    errors::{FoodKey, ServiceError},
    models::food::{Food, FoodType, NewFood},
};

fn new_food(name: &str, max: i32, quantity: i32) -> NewFood {
    NewFood {
        name: name.to_string(),
        brand: "Mars".to_string(),
        max,
        quantity,
        food_type: FoodType::Premium,
    }
}

#[tokio::test]
async fn insert_assigns_ids_and_lookups_find_the_record() {
    let repo = sqlite_repository().await;

    let first = repo.insert(new_food("Magnus PREMIUM", 50, 10)).await.unwrap();
    let second = repo.insert(new_food("Golden", 30, 0)).await.unwrap();
    assert!(second.id > first.id);

    let by_id = repo.find_by_id(first.id).await.unwrap();
    assert_eq!(by_id, Some(first.clone()));

    let by_name = repo.find_by_name("Magnus PREMIUM").await.unwrap();
    assert_eq!(by_name, Some(first));

    assert_eq!(repo.find_by_name("magnus premium").await.unwrap(), None);
    assert_eq!(repo.find_by_id(9_999).await.unwrap(), None);
}

#[tokio::test]
async fn food_type_survives_the_round_trip() {
    let repo = sqlite_repository().await;
    let mut candidate = new_food("Naturalis Adult", 20, 5);
    candidate.food_type = FoodType::Naturalis;

    let stored = repo.insert(candidate).await.unwrap();
    let loaded = repo.find_by_id(stored.id).await.unwrap().unwrap();
    assert_eq!(loaded.food_type, FoodType::Naturalis);
}

#[tokio::test]
async fn unique_name_is_enforced_by_the_store() {
    let repo = sqlite_repository().await;
    repo.insert(new_food("Magnus PREMIUM", 50, 10)).await.unwrap();

    let result = repo.insert(new_food("Magnus PREMIUM", 10, 1)).await;
    assert_matches!(result, Err(ServiceError::AlreadyRegistered(name)) if name == "Magnus PREMIUM");
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_overwrites_existing_record() {
    let repo = sqlite_repository().await;
    let mut food = repo.insert(new_food("Magnus PREMIUM", 50, 10)).await.unwrap();

    food.quantity = 50;
    let updated = repo.update(food.clone()).await.unwrap();
    assert_eq!(updated.quantity, 50);

    let loaded = repo.find_by_id(food.id).await.unwrap().unwrap();
    assert_eq!(loaded, updated);
}

#[tokio::test]
async fn update_of_missing_record_is_not_found() {
    let repo = sqlite_repository().await;
    let ghost = Food {
        id: 77,
        name: "Ghost".into(),
        brand: "None".into(),
        max: 1,
        quantity: 0,
        food_type: FoodType::Standard,
    };

    let result = repo.update(ghost).await;
    assert_matches!(result, Err(ServiceError::NotFound(FoodKey::Id(77))));
}

#[tokio::test]
async fn delete_removes_only_the_target() {
    let repo = sqlite_repository().await;
    let keep = repo.insert(new_food("Keep", 10, 1)).await.unwrap();
    let drop = repo.insert(new_food("Drop", 10, 1)).await.unwrap();

    repo.delete_by_id(drop.id).await.unwrap();

    assert_eq!(repo.find_by_id(drop.id).await.unwrap(), None);
    assert_eq!(repo.find_all().await.unwrap(), vec![keep]);

    let again = repo.delete_by_id(drop.id).await;
    assert_matches!(again, Err(ServiceError::NotFound(FoodKey::Id(id))) if id == drop.id);
}

#[tokio::test]
async fn find_all_is_ordered_by_id() {
    let repo = sqlite_repository().await;
    assert!(repo.find_all().await.unwrap().is_empty());

    for name in ["c", "a", "b"] {
        repo.insert(new_food(name, 10, 0)).await.unwrap();
    }

    let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|f| f.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn ping_succeeds_on_live_connection() {
    let repo = sqlite_repository().await;
    assert!(repo.ping().await.is_ok());
}
