pub mod food;

pub use food::{Food, FoodType, NewFood, StockDirection};
