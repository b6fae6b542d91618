use crate::domain::model::MacroFeatures;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A loaded, read-only classifier. Returns the raw binary label (0 or 1).
pub trait CalorieModel: Send + Sync {
    fn predict(&self, features: &MacroFeatures) -> u8;
}

/// External text-completion backend.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn model_path(&self) -> &str;
    fn dataset_path(&self) -> &str;
    fn assistant_base_url(&self) -> &str;
    fn assistant_model(&self) -> &str;
    fn assistant_api_key(&self) -> Option<&str>;
    fn assistant_timeout_seconds(&self) -> Option<u64>;
    fn plan_days(&self) -> usize;
    fn meals_per_day(&self) -> usize;
}
