use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Location source not found: {path}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed location '{name}' at line {line}: {reason}")]
    Malformed {
        name: String,
        line: usize,
        reason: String,
    },

    #[error("Location '{name}' has no rolls")]
    EmptyLocation { name: String },

    #[error("Unknown location: {name}")]
    UnknownLocation { name: String },

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LocationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LocationError::NotFound { .. } | LocationError::UnknownLocation { .. } => {
                ErrorCategory::Input
            }
            LocationError::Malformed { .. } | LocationError::EmptyLocation { .. } => {
                ErrorCategory::Data
            }
            LocationError::ConfigValidationError { .. }
            | LocationError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LocationError::IoError(_) | LocationError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LocationError::NotFound { path, .. } => {
                format!("Could not open location file '{}'", path)
            }
            LocationError::Malformed { name, line, .. } => format!(
                "Location '{}' is not a list of message/destination line pairs (line {})",
                name, line
            ),
            LocationError::EmptyLocation { name } => {
                format!("Location '{}' has nothing to roll", name)
            }
            LocationError::UnknownLocation { name } => {
                format!("No location named '{}' was loaded", name)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the path or location name and try again",
            ErrorCategory::Data => {
                "Each roll needs a message line followed by a destination line"
            }
            ErrorCategory::Configuration => "Fix the configuration value and rerun",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, LocationError>;
