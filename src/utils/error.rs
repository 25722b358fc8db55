use crate::core::lyrics::Language;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SongError {
    #[error("Invalid bottle count: '{raw}' is not a valid integer number")]
    InvalidCountFormat { raw: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SongError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SongError::InvalidCountFormat { .. } => ErrorCategory::Input,
            SongError::ConfigValidationError { .. } | SongError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SongError::IoError(_) | SongError::CsvError(_) | SongError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息（不含內部細節）
    pub fn user_friendly_message(&self) -> String {
        match self {
            SongError::InvalidCountFormat { raw } => Language::English.invalid_count_message(raw),
            SongError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            SongError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not allowed for '{}': {}", value, field, reason),
            SongError::IoError(e) => format!("Could not write the song: {}", e),
            SongError::CsvError(e) => format!("Could not write the song as CSV: {}", e),
            SongError::SerializationError(e) => {
                format!("Could not write the song as JSON: {}", e)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Pass a whole number such as 99, or omit it to use the default",
            ErrorCategory::Configuration => "Check the config file and the command line flags",
            ErrorCategory::Output => "Check that standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, SongError>;
