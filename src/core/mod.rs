pub mod assistant;
pub mod budget;
pub mod classifier;
pub mod engine;
pub mod lookup;
pub mod sampler;

pub use crate::domain::model::{CalorieClass, NutritionRecord, WeeklyPlan};
pub use crate::domain::ports::{CalorieModel, CompletionService, ConfigProvider};
pub use crate::utils::error::Result;
