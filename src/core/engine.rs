use crate::adapters::dataset;
use crate::adapters::gemini::GeminiClient;
use crate::adapters::model_artifact::ModelArtifact;
use crate::core::assistant::Assistant;
use crate::core::classifier::CalorieClassifier;
use crate::core::lookup::NutritionTable;
use crate::core::sampler::WeeklySampler;
use crate::domain::model::{CalorieClass, NutritionRecord, WeeklyPlan};
use crate::domain::ports::{CalorieModel, CompletionService, ConfigProvider};
use crate::utils::error::{NutriError, Result};
use std::sync::Arc;
use std::time::Duration;

/// Process-wide handles, built once at startup and only read afterwards.
#[derive(Clone)]
pub struct NutriPlan {
    classifier: CalorieClassifier,
    table: Arc<NutritionTable>,
    assistant: Option<Assistant>,
}

impl NutriPlan {
    pub fn new(
        model: Arc<dyn CalorieModel>,
        records: Vec<NutritionRecord>,
        backend: Option<Arc<dyn CompletionService>>,
    ) -> Self {
        Self {
            classifier: CalorieClassifier::new(model),
            table: Arc::new(NutritionTable::new(records)),
            assistant: backend.map(Assistant::new),
        }
    }

    /// Loads the model and dataset. Either file missing is fatal.
    /// The assistant is only wired up when an API key is configured.
    pub fn load<C: ConfigProvider>(config: &C) -> Result<Self> {
        tracing::info!("Loading model from {}", config.model_path());
        let model = ModelArtifact::from_file(config.model_path())?;

        tracing::info!("Loading dataset from {}", config.dataset_path());
        let records = dataset::load_records(config.dataset_path())?;

        let backend = match config.assistant_api_key() {
            Some(api_key) => {
                let client: Arc<dyn CompletionService> = Arc::new(GeminiClient::new(
                    config.assistant_base_url(),
                    config.assistant_model(),
                    api_key,
                    config.assistant_timeout_seconds().map(Duration::from_secs),
                )?);
                Some(client)
            }
            None => {
                tracing::debug!("No assistant API key configured");
                None
            }
        };

        let description = model.describe();
        let app = Self::new(Arc::new(model), records, backend);
        tracing::info!(
            "Startup complete: {}, {} nutrition records",
            description,
            app.table.len()
        );
        Ok(app)
    }

    pub fn classify(&self, protein_g: f64, carbs_g: f64, fat_g: f64) -> CalorieClass {
        self.classifier.classify(protein_g, carbs_g, fat_g)
    }

    pub fn find(&self, food_substring: &str) -> Option<&NutritionRecord> {
        self.table.find(food_substring)
    }

    pub fn sample_days(&self, n_days: usize, meals_per_day: usize) -> Result<WeeklyPlan> {
        WeeklySampler::new(self.table.records()).sample_days(n_days, meals_per_day)
    }

    pub async fn ask(&self, prompt: &str) -> Result<String> {
        match &self.assistant {
            Some(assistant) => assistant.ask(prompt).await,
            None if prompt.trim().is_empty() => Err(NutriError::ValidationError {
                message: "Please enter a question.".to_string(),
            }),
            None => {
                let err = NutriError::MissingConfigError {
                    field: "assistant.api_key (or GEMINI_API_KEY)".to_string(),
                };
                tracing::error!("Completion request not attempted: {}", err);
                Ok(format!("Error: {}", err))
            }
        }
    }

    pub fn table(&self) -> &NutritionTable {
        &self.table
    }
}
