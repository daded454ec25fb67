use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid date '{input}': {reason}")]
    InvalidDateError { input: String, reason: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Storage error for key '{key}': {message}")]
    StorageError { key: String, message: String },

    #[error("{what} not found")]
    NotFoundError { what: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
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

impl MatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::InvalidDateError { .. }
            | MatchError::ValidationError { .. }
            | MatchError::NotFoundError { .. } => ErrorCategory::Input,
            MatchError::TomlError(_)
            | MatchError::ConfigError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MatchError::SerializationError(_) | MatchError::StorageError { .. } => {
                ErrorCategory::Storage
            }
            MatchError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MatchError::InvalidDateError { .. } => "Use the YYYY-MM-DD format, e.g. 1996-09-01",
            MatchError::ValidationError { .. } => "Check the values you entered and try again",
            MatchError::NotFoundError { .. } => "List the saved entries to find a valid id",
            MatchError::TomlError(_) => "Make sure the config file is valid TOML",
            MatchError::ConfigError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. } => "Review the configuration file and flags",
            MatchError::SerializationError(_) | MatchError::StorageError { .. } => {
                "Remove or repair the store file; it will be recreated"
            }
            MatchError::IoError(_) => "Check that the store path exists and is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MatchError::InvalidDateError { input, .. } => {
                format!("'{}' doesn't look like a birthday 🎂", input)
            }
            MatchError::NotFoundError { what } => format!("Couldn't find {} 💫", what),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
