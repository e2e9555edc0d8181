use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    /// Short message suitable for the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => format!("Failed to write output: {}", e),
            AppError::TomlError(e) => format!("Script file is not valid TOML: {}", e),
            AppError::SerializationError(e) => format!("Failed to render transcript: {}", e),
            AppError::ConfigError { message } => message.clone(),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
