use thiserror::Error;

/// 輸入驗證失敗的原因，兩者都回 HTTP 400
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid number format: {raw:?}")]
    InvalidFormat { raw: String },

    #[error("Number out of 32-bit signed range: {raw:?}")]
    OutOfRange { raw: String },
}

impl InputError {
    /// 原始輸入字串 (未經修剪)
    pub fn raw(&self) -> &str {
        match self {
            InputError::InvalidFormat { raw } | InputError::OutOfRange { raw } => raw,
        }
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Fun fact unavailable for {number}: {reason}")]
    FactUnavailable { number: i32, reason: String },

    #[error("Fun fact lookup for {number} exceeded {budget_ms}ms")]
    FactTimeout { number: i32, budget_ms: u128 },
}

pub type Result<T> = std::result::Result<T, ServiceError>;
