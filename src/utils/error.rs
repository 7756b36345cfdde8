use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendError {
    #[error("Invalid input: {message}")]
    InvalidInputError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigurationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Chart rendering error: {message}")]
    ChartError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Presentation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl TrendError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInputError {
            message: message.into(),
        }
    }

    pub fn invalid_configuration(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfigurationError {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInputError { .. } | Self::CsvError(_) => ErrorCategory::Input,
            Self::InvalidConfigurationError { .. }
            | Self::MissingConfigError { .. }
            | Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::ChartError { .. } => ErrorCategory::Presentation,
        }
    }

    /// Chart and export failures rank below input and configuration failures.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Presentation => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInputError { .. } => {
                "Check that both weather files contain at least one row with a year and avg_temp"
            }
            Self::CsvError(_) => {
                "Make sure the file is a CSV with 'year' (integer) and 'avg_temp' (number) columns"
            }
            Self::InvalidConfigurationError { .. } => {
                "Fix the highlighted option; the rolling average must be a positive number of years"
            }
            Self::MissingConfigError { .. } => "Provide the missing option on the command line or in the config file",
            Self::ConfigError { .. } => "Validate the TOML syntax of the configuration file",
            Self::IoError(_) => "Verify that the file paths exist and are readable/writable",
            Self::SerializationError(_) => "Retry the export with a different output path or format",
            Self::ChartError { .. } => "Retry with a different chart output path",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInputError { message } => format!("The weather data is not usable: {}", message),
            Self::InvalidConfigurationError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Option '{}' is required", field),
            Self::CsvError(e) => format!("Could not read weather CSV: {}", e),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Could not export the report: {}", e),
            Self::ConfigError { field, message } => {
                format!("Configuration file problem ({}): {}", field, message)
            }
            Self::ChartError { message } => format!("Could not draw the trend chart: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrendError>;
