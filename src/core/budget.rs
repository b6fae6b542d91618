use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use serde::Serialize;

pub const MIN_WEEKLY_BUDGET: u32 = 20;
pub const MAX_WEEKLY_BUDGET: u32 = 200;
pub const DEFAULT_WEEKLY_BUDGET: u32 = 50;

/// Fixed split of a weekly food budget. Shares sum to 1.0.
pub const CATEGORY_SHARES: [(&str, f64); 4] = [
    ("Proteins", 0.35),
    ("Vegetables", 0.25),
    ("Grains", 0.20),
    ("Other", 0.20),
];

pub const SAVING_TIPS: [(&str, [&str; 4]); 2] = [
    (
        "Grocery Shopping Tips",
        [
            "Buy in bulk for staple items",
            "Choose seasonal produce",
            "Compare unit prices",
            "Use frozen vegetables",
        ],
    ),
    (
        "Meal Prep Hacks",
        [
            "Cook large batches and freeze",
            "Repurpose leftovers creatively",
            "Use versatile ingredients",
            "Plan meals around sales",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAllocation {
    pub category: &'static str,
    pub share: f64,
    pub amount: f64,
}

impl BudgetAllocation {
    pub fn percent(&self) -> f64 {
        self.share * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPlan {
    pub weekly_budget: u32,
    pub allocations: Vec<BudgetAllocation>,
}

impl BudgetPlan {
    pub fn allocate(weekly_budget: u32) -> Result<Self> {
        validate_range("weekly_budget", weekly_budget, MIN_WEEKLY_BUDGET, MAX_WEEKLY_BUDGET)?;

        let allocations = CATEGORY_SHARES
            .iter()
            .map(|&(category, share)| BudgetAllocation {
                category,
                share,
                amount: f64::from(weekly_budget) * share,
            })
            .collect();

        Ok(Self {
            weekly_budget,
            allocations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_allocation() {
        let plan = BudgetPlan::allocate(DEFAULT_WEEKLY_BUDGET).unwrap();
        let categories: Vec<_> = plan.allocations.iter().map(|a| a.category).collect();
        assert_eq!(categories, ["Proteins", "Vegetables", "Grains", "Other"]);
        assert!((plan.allocations[0].amount - 17.5).abs() < 1e-9);
        assert!((plan.allocations[1].amount - 12.5).abs() < 1e-9);
        assert!((plan.allocations[2].percent() - 20.0).abs() < 1e-9);

        let total: f64 = plan.allocations.iter().map(|a| a.amount).sum();
        assert!((total - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_outside_slider_range() {
        assert!(BudgetPlan::allocate(19).is_err());
        assert!(BudgetPlan::allocate(201).is_err());
        assert!(BudgetPlan::allocate(20).is_ok());
        assert!(BudgetPlan::allocate(200).is_ok());
    }
}
