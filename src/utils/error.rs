use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaycesError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Unknown {kind} filter: '{value}'")]
    UnknownFilterError { kind: String, value: String },

    #[error("Cannot apply '{event}' while in state '{state}'")]
    InvalidTransitionError { state: String, event: String },

    #[error("{what} not found: {key}")]
    NotFoundError { what: String, key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Input,
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlaycesError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn not_found(what: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFoundError {
            what: what.into(),
            key: key.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Data,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. }
            | Self::UnknownFilterError { .. }
            | Self::NotFoundError { .. } => ErrorCategory::Input,
            Self::InvalidTransitionError { .. } => ErrorCategory::State,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::State => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(_) => "The catalog file is not valid JSON".to_string(),
            Self::CsvError(_) => "Could not render the CSV output".to_string(),
            Self::UnknownFilterError { kind, value } => {
                format!("'{}' is not a known {} filter", value, kind)
            }
            Self::NotFoundError { what, key } => format!("No {} named '{}'", what, key),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the path exists and is readable",
            Self::SerializationError(_) => "Validate the catalog file against the sample layout",
            Self::CsvError(_) => "Retry with --format json",
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Review the configuration file and CLI flags",
            Self::ValidationError { .. } => "Correct the input and try again",
            Self::UnknownFilterError { .. } => "Run with --help to list the accepted filter values",
            Self::InvalidTransitionError { .. } => "Go back and restart the sign-up step",
            Self::NotFoundError { .. } => "List the available entries first",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaycesError>;
