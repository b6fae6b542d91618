use crate::adapters::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::core::sampler::{DEFAULT_DAYS, DEFAULT_MEALS_PER_DAY};
use crate::core::ConfigProvider;
use crate::utils::error::{NutriError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub data: DataConfig,
    pub assistant: AssistantConfig,
    pub plan: PlanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub model_path: String,
    pub dataset_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            model_path: "nutrition_model.json".to_string(),
            dataset_path: "processed_nutrition.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub days: usize,
    pub meals_per_day: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            meals_per_day: DEFAULT_MEALS_PER_DAY,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NutriError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NutriError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 有指定檔案就讀檔，否則使用預設值
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NutriError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// API key 未在檔案中設定時，改用環境變數
    pub fn apply_env(&mut self) {
        if self.assistant_api_key().is_none() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                if !key.trim().is_empty() {
                    self.assistant.api_key = Some(key);
                }
            }
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("data.model_path", &self.data.model_path)?;
        validation::validate_file_extension("data.model_path", &self.data.model_path, &["json"])?;
        validation::validate_path("data.dataset_path", &self.data.dataset_path)?;
        validation::validate_file_extension("data.dataset_path", &self.data.dataset_path, &["csv"])?;

        validation::validate_url("assistant.base_url", &self.assistant.base_url)?;
        validation::validate_non_empty_string("assistant.model", &self.assistant.model)?;
        if let Some(timeout) = self.assistant.timeout_seconds {
            validation::validate_range("assistant.timeout_seconds", timeout, 1, u64::MAX)?;
        }

        validation::validate_positive_number("plan.days", self.plan.days, 1)?;
        validation::validate_positive_number("plan.meals_per_day", self.plan.meals_per_day, 1)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn model_path(&self) -> &str {
        &self.data.model_path
    }

    fn dataset_path(&self) -> &str {
        &self.data.dataset_path
    }

    fn assistant_base_url(&self) -> &str {
        &self.assistant.base_url
    }

    fn assistant_model(&self) -> &str {
        &self.assistant.model
    }

    fn assistant_api_key(&self) -> Option<&str> {
        // 未替換的 ${VAR} 視為未設定
        self.assistant
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty() && !key.starts_with("${"))
    }

    fn assistant_timeout_seconds(&self) -> Option<u64> {
        self.assistant.timeout_seconds
    }

    fn plan_days(&self) -> usize {
        self.plan.days
    }

    fn meals_per_day(&self) -> usize {
        self.plan.meals_per_day
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
