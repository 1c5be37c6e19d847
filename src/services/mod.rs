pub mod food;

pub use food::FoodService;
