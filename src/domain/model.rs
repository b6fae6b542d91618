use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the nutrition dataset. Values are per serving as published in the CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    #[serde(rename = "Food Item")]
    pub food_name: String,
    #[serde(rename = "Calories")]
    pub calories: f64,
    #[serde(rename = "Protein")]
    pub protein_g: f64,
    #[serde(rename = "Carbs")]
    pub carbs_g: f64,
    #[serde(rename = "Fat")]
    pub fat_g: f64,
}

impl NutritionRecord {
    /// Share of protein/carbs/fat in the record's total macro grams, in percent.
    /// All zeros when the record carries no macros.
    pub fn macro_breakdown(&self) -> MacroBreakdown {
        let total = self.protein_g + self.carbs_g + self.fat_g;
        if total <= 0.0 {
            return MacroBreakdown::default();
        }
        MacroBreakdown {
            protein_pct: self.protein_g / total * 100.0,
            carbs_pct: self.carbs_g / total * 100.0,
            fat_pct: self.fat_g / total * 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

/// Classifier input row, always in `[protein, carbs, fat]` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroFeatures {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroFeatures {
    pub const LEN: usize = 3;

    pub fn new(protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.protein_g, self.carbs_g, self.fat_g]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalorieClass {
    High,
    Low,
}

impl CalorieClass {
    /// Label 1 is the high-calorie class; every other label is low.
    pub fn from_label(label: u8) -> Self {
        if label == 1 {
            CalorieClass::High
        } else {
            CalorieClass::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalorieClass::High => "High Calorie",
            CalorieClass::Low => "Low Calorie",
        }
    }
}

impl fmt::Display for CalorieClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub day_index: usize,
    pub weekday: Weekday,
    pub meals: Vec<NutritionRecord>,
}

impl DayPlan {
    pub fn day_name(&self) -> String {
        weekday_name(self.weekday).to_string()
    }
}

/// Ordered day -> meals mapping; `days[i].day_index == i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, index: usize) -> Option<&DayPlan> {
        self.days.get(index)
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
