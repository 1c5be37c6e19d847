pub mod food;

pub use food::{FoodDto, QuantityDto};
