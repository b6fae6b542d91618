use crate::config::toml_config::TomlConfig;
use crate::core::sampler::{Allergy, DietType, PlanRequest};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriplan")]
#[command(about = "NutriPlan: calorie prediction, nutrition lookup, weekly meal plans and nutrition Q&A")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override data.model_path
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Override data.dataset_path
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Predict the calorie class of a protein/carbs/fat combination
    Predict {
        #[arg(long, default_value_t = 50.0)]
        protein: f64,
        #[arg(long, default_value_t = 100.0)]
        carbs: f64,
        #[arg(long, default_value_t = 30.0)]
        fat: f64,
        #[arg(long = "pref", value_enum)]
        preferences: Vec<DietaryPreference>,
    },
    /// Show nutrition facts for the first food whose name contains FOOD
    Lookup { food: String },
    /// Draw a placeholder weekly meal plan from the dataset
    Plan {
        /// Override plan.days
        #[arg(long)]
        days: Option<usize>,
        /// Override plan.meals_per_day
        #[arg(long)]
        meals: Option<usize>,
        #[arg(long, default_value_t = 2000)]
        calorie_goal: u32,
        #[arg(long, value_enum, default_value_t = DietType::Balanced)]
        diet: DietType,
        #[arg(long, default_value_t = 100)]
        budget: u32,
        #[arg(long = "allergy", value_enum)]
        allergies: Vec<Allergy>,
    },
    /// Split a weekly food budget across categories
    Budget {
        #[arg(default_value_t = crate::core::budget::DEFAULT_WEEKLY_BUDGET)]
        amount: u32,
    },
    /// Ask the nutrition assistant a question
    Ask {
        #[arg(default_value = "")]
        prompt: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    GlutenFree,
    LowCarb,
    DairyFree,
}

impl std::fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::GlutenFree => "Gluten-Free",
            DietaryPreference::LowCarb => "Low-Carb",
            DietaryPreference::DairyFree => "Dairy-Free",
        })
    }
}

impl CliConfig {
    /// 命令列參數優先於 TOML 設定
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(model) = &self.model {
            config.data.model_path = model.clone();
        }
        if let Some(dataset) = &self.dataset {
            config.data.dataset_path = dataset.clone();
        }
        if let Command::Plan { days, meals, .. } = &self.command {
            if let Some(days) = days {
                config.plan.days = *days;
            }
            if let Some(meals) = meals {
                config.plan.meals_per_day = *meals;
            }
        }
    }
}

impl Command {
    pub fn plan_request(&self) -> Option<PlanRequest> {
        match self {
            Command::Plan {
                calorie_goal,
                diet,
                budget,
                allergies,
                ..
            } => Some(PlanRequest {
                calorie_goal: *calorie_goal,
                diet_type: *diet,
                weekly_budget: *budget,
                allergies: allergies.clone(),
            }),
            _ => None,
        }
    }
}
