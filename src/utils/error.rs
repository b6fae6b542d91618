use thiserror::Error;

#[derive(Error, Debug)]
pub enum NutriError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{kind} file not found: {path}")]
    MissingArtifact { kind: String, path: String },

    #[error("Model error: {message}")]
    ModelError { message: String },

    #[error("Dataset error: {message}")]
    DatasetError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Assistant error: {message}")]
    AssistantError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Startup,
    Configuration,
    Input,
    Network,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NutriError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NutriError::MissingArtifact { .. } | NutriError::ModelError { .. } => {
                ErrorCategory::Startup
            }
            NutriError::ConfigValidationError { .. }
            | NutriError::InvalidConfigValueError { .. }
            | NutriError::MissingConfigError { .. } => ErrorCategory::Configuration,
            NutriError::ValidationError { .. } => ErrorCategory::Input,
            NutriError::ApiError(_) | NutriError::AssistantError { .. } => ErrorCategory::Network,
            NutriError::CsvError(_)
            | NutriError::IoError(_)
            | NutriError::SerializationError(_)
            | NutriError::DatasetError { .. }
            | NutriError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 啟動資源缺失：無法提供任何功能
            NutriError::MissingArtifact { .. }
            | NutriError::ModelError { .. }
            | NutriError::DatasetError { .. }
            | NutriError::CsvError(_) => ErrorSeverity::Critical,
            NutriError::ApiError(_) | NutriError::AssistantError { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NutriError::MissingArtifact { kind, path } => {
                format!("{} file not found. Please provide '{}' to proceed.", kind, path)
            }
            NutriError::ModelError { message } => format!("The model file is invalid: {}", message),
            NutriError::DatasetError { message } => {
                format!("The nutrition dataset is invalid: {}", message)
            }
            NutriError::CsvError(e) => format!("The nutrition dataset could not be parsed: {}", e),
            NutriError::ValidationError { message } => message.clone(),
            NutriError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Startup => {
                "Check --model / --dataset paths or the [data] section of the config file"
            }
            ErrorCategory::Configuration => "Review the config file and command line flags",
            ErrorCategory::Input => "Check the values passed on the command line",
            ErrorCategory::Network => "Check network access and the assistant API key, then retry",
            ErrorCategory::Data => "Make sure the dataset has the Food Item/Calories/Protein/Carbs/Fat columns",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, NutriError>;
