use crate::domain::model::{DayPlan, NutritionRecord, WeeklyPlan};
use crate::utils::error::{NutriError, Result};
use crate::utils::validation::{validate_min, Validate};
use chrono::Weekday;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_DAYS: usize = 7;
pub const DEFAULT_MEALS_PER_DAY: usize = 3;

/// Draws placeholder meals per day. No planning constraint is applied.
#[derive(Debug, Clone, Copy)]
pub struct WeeklySampler<'a> {
    records: &'a [NutritionRecord],
}

impl<'a> WeeklySampler<'a> {
    pub fn new(records: &'a [NutritionRecord]) -> Self {
        Self { records }
    }

    pub fn sample_days(&self, n_days: usize, meals_per_day: usize) -> Result<WeeklyPlan> {
        self.sample_days_with(&mut rand::thread_rng(), n_days, meals_per_day)
    }

    /// Each day draws without replacement; days are independent of each other.
    pub fn sample_days_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n_days: usize,
        meals_per_day: usize,
    ) -> Result<WeeklyPlan> {
        if meals_per_day > self.records.len() {
            return Err(NutriError::ProcessingError {
                message: format!(
                    "cannot draw {} meals per day from a dataset of {} records",
                    meals_per_day,
                    self.records.len()
                ),
            });
        }

        let mut weekday = Weekday::Mon;
        let days = (0..n_days)
            .map(|day_index| {
                let meals = self
                    .records
                    .choose_multiple(rng, meals_per_day)
                    .cloned()
                    .collect();
                let plan = DayPlan {
                    day_index,
                    weekday,
                    meals,
                };
                weekday = weekday.succ();
                plan
            })
            .collect();

        Ok(WeeklyPlan { days })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DietType {
    Balanced,
    Keto,
    Mediterranean,
    PlantBased,
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DietType::Balanced => "Balanced",
            DietType::Keto => "Keto",
            DietType::Mediterranean => "Mediterranean",
            DietType::PlantBased => "Plant-Based",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Allergy {
    Dairy,
    Nuts,
    Gluten,
    Shellfish,
}

/// Inputs collected by the weekly plan form. Validated, logged, not applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRequest {
    pub calorie_goal: u32,
    pub diet_type: DietType,
    pub weekly_budget: u32,
    pub allergies: Vec<Allergy>,
}

impl PlanRequest {
    pub const MIN_CALORIE_GOAL: u32 = 1200;
    pub const MIN_WEEKLY_BUDGET: u32 = 20;
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            calorie_goal: 2000,
            diet_type: DietType::Balanced,
            weekly_budget: 100,
            allergies: Vec::new(),
        }
    }
}

impl Validate for PlanRequest {
    fn validate(&self) -> Result<()> {
        validate_min("Daily Calorie Goal", self.calorie_goal, Self::MIN_CALORIE_GOAL)?;
        validate_min("Weekly Budget ($)", self.weekly_budget, Self::MIN_WEEKLY_BUDGET)?;
        Ok(())
    }
}
