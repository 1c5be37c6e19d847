pub mod common;
pub mod foods;
pub mod health;

pub use foods::FoodHandlerState;
