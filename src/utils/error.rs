use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Invalid timestamp: {field} = {value} ({reason})")]
    InvalidTimestamp {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot parse timestamp '{input}': {reason}")]
    ParseError { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
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
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DiffError {
    pub fn invalid_field(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        DiffError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DiffError::InvalidTimestamp { .. } | DiffError::ParseError { .. } => {
                ErrorCategory::Input
            }
            DiffError::ConfigValidationError { .. } | DiffError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DiffError::IoError(_) | DiffError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DiffError::InvalidTimestamp { .. } => {
                "Check that the month is 1-12 and the day exists in that month"
            }
            DiffError::ParseError { .. } => {
                "Use YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DDTHH:MM:SS.fff"
            }
            DiffError::IoError(_) => "Make sure the file exists and is readable",
            DiffError::SerializationError(_) => "Retry without --json",
            DiffError::ConfigValidationError { .. } | DiffError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DiffError::InvalidTimestamp { field, value, .. } => {
                format!("'{}' is not a valid {}", value, field)
            }
            DiffError::ParseError { input, .. } => {
                format!("Could not read '{}' as a date", input)
            }
            DiffError::IoError(e) => format!("File access failed: {}", e),
            DiffError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            DiffError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            DiffError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DiffError>;
