pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use crate::core::engine::NutriPlan;
pub use domain::model::{CalorieClass, NutritionRecord, WeeklyPlan};
pub use utils::error::{NutriError, Result};
