use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason codes carried by the error variant of a domain outcome.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[error("Invalid argument")]
    InvalidArgument,

    #[error("Not found")]
    NotFound,

    #[error("Server error")]
    ServerError,

    #[error("Arithmetic overflow")]
    Overflow,
}

impl ErrorCode {
    /// Stable numeric code, as printed by the `code` error style.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::InvalidArgument => 1,
            ErrorCode::NotFound => 2,
            ErrorCode::ServerError => 3,
            ErrorCode::Overflow => 4,
        }
    }
}

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Division failed: {0}")]
    DivisionError(#[from] ErrorCode),

    #[error("Result store failed for key '{key}': {code}")]
    StoreError { key: String, code: ErrorCode },

    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Arithmetic,
    Storage,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CalcError::DivisionError(_) => ErrorCategory::Arithmetic,
            CalcError::StoreError { .. } | CalcError::SerializationError(_) => {
                ErrorCategory::Storage
            }
            CalcError::IoError(_) | CalcError::WorkerPanicked { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::DivisionError(_) => ErrorSeverity::Medium,
            CalcError::StoreError { code, .. } if *code == ErrorCode::NotFound => {
                ErrorSeverity::Low
            }
            CalcError::StoreError { .. } => ErrorSeverity::Medium,
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. }
            | CalcError::SerializationError(_) => ErrorSeverity::High,
            CalcError::IoError(_) | CalcError::WorkerPanicked { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::DivisionError(ErrorCode::InvalidArgument) => {
                "Cannot divide by zero".to_string()
            }
            CalcError::DivisionError(ErrorCode::Overflow) => {
                "The quotient does not fit in a 64-bit integer".to_string()
            }
            CalcError::DivisionError(code) => format!("Division failed: {}", code),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            CalcError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            CalcError::ConfigValidationError { message, .. } => {
                format!("Configuration could not be loaded: {}", message)
            }
            CalcError::IoError(e) => format!("File system error: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the configuration file and command-line flags",
            ErrorCategory::Arithmetic => "Use a non-zero divisor, or choose another overflow_policy",
            ErrorCategory::Storage => "Check that the result store is reachable and retry",
            ErrorCategory::System => "Check file permissions and system resources",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ErrorCode::InvalidArgument.code(), 1);
        assert_eq!(ErrorCode::NotFound.code(), 2);
        assert_eq!(ErrorCode::ServerError.code(), 3);
        assert_eq!(ErrorCode::Overflow.code(), 4);
    }

    #[test]
    fn test_division_error_classification() {
        let err: CalcError = ErrorCode::InvalidArgument.into();
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.user_friendly_message(), "Cannot divide by zero");
        assert_eq!(err.to_string(), "Division failed: Invalid argument");
    }

    #[test]
    fn test_config_error_is_high_severity() {
        let err = CalcError::MissingConfigError {
            field: "divider.overflow_policy".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
