use crate::domain::model::NutritionRecord;

/// The loaded dataset, in file order. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct NutritionTable {
    records: Vec<NutritionRecord>,
}

impl NutritionTable {
    pub fn new(records: Vec<NutritionRecord>) -> Self {
        Self { records }
    }

    /// First record whose name contains `food_substring`, ignoring case.
    /// An empty query matches the first record.
    pub fn find(&self, food_substring: &str) -> Option<&NutritionRecord> {
        let needle = food_substring.to_lowercase();
        self.records
            .iter()
            .find(|r| r.food_name.to_lowercase().contains(&needle))
    }

    /// Every match, in dataset order.
    pub fn find_all<'a>(&'a self, food_substring: &str) -> impl Iterator<Item = &'a NutritionRecord> + 'a {
        let needle = food_substring.to_lowercase();
        self.records
            .iter()
            .filter(move |r| r.food_name.to_lowercase().contains(&needle))
    }

    pub fn records(&self) -> &[NutritionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
