use crate::domain::model::{CalorieClass, MacroFeatures};
use crate::domain::ports::CalorieModel;
use std::sync::Arc;

/// Maps the model's raw label onto the two calorie classes.
#[derive(Clone)]
pub struct CalorieClassifier {
    model: Arc<dyn CalorieModel>,
}

impl CalorieClassifier {
    pub fn new(model: Arc<dyn CalorieModel>) -> Self {
        Self { model }
    }

    pub fn classify(&self, protein_g: f64, carbs_g: f64, fat_g: f64) -> CalorieClass {
        let features = MacroFeatures::new(protein_g, carbs_g, fat_g);
        let label = self.model.predict(&features);
        tracing::debug!("Model label {} for {:?}", label, features);
        CalorieClass::from_label(label)
    }
}

impl std::fmt::Debug for CalorieClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalorieClassifier").finish_non_exhaustive()
    }
}
