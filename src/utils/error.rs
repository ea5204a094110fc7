use thiserror::Error;

/// 查無資料時顯示給使用者的訊息
pub const NOT_FOUND_MESSAGE: &str = "Pokémon not found! Please check the name or ID.";

/// 其他所有失敗共用的訊息
pub const NETWORK_MESSAGE: &str = "Network error! Unable to reach the PokéAPI.";

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No record found for query '{query}'")]
    NotFound { query: String },

    #[error("API responded with status {status}")]
    HttpStatus { status: u16 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

/// 錯誤分類：查詢失敗只分兩種，其餘屬於設定或本機 IO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Network,
    Configuration,
    Io,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::NotFound { .. } => ErrorCategory::NotFound,
            LookupError::HttpStatus { .. }
            | LookupError::ApiError(_)
            | LookupError::SerializationError(_) => ErrorCategory::Network,
            LookupError::IoError(_) => ErrorCategory::Io,
            LookupError::ConfigError { .. }
            | LookupError::ConfigValidationError { .. }
            | LookupError::InvalidConfigValueError { .. }
            | LookupError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 顯示在錯誤面板上的文字
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ErrorCategory::Network => NETWORK_MESSAGE.to_string(),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Io => format!("File operation failed: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::NotFound => "Check the spelling of the name or try a numeric ID",
            ErrorCategory::Network => "Check your connection and search again",
            ErrorCategory::Configuration => "Fix the configuration value and restart",
            ErrorCategory::Io => "Check that the path exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
