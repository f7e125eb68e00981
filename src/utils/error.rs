use thiserror::Error;

#[derive(Error, Debug)]
pub enum SavingsError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to open '{path}': {source}")]
    SourceOpenError {
        path: String,
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Processing,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SavingsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SavingsError::ConfigError { .. }
            | SavingsError::InvalidConfigValueError { .. }
            | SavingsError::MissingConfigError { .. }
            | SavingsError::ValidationError { .. } => ErrorCategory::Configuration,
            SavingsError::SourceOpenError { .. } | SavingsError::CsvError(_) => {
                ErrorCategory::Input
            }
            SavingsError::ProcessingError { .. } => ErrorCategory::Processing,
            SavingsError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SavingsError::ConfigError { .. }
            | SavingsError::InvalidConfigValueError { .. }
            | SavingsError::MissingConfigError { .. }
            | SavingsError::ValidationError { .. } => ErrorSeverity::High,
            SavingsError::SourceOpenError { .. } => ErrorSeverity::Critical,
            SavingsError::CsvError(_) | SavingsError::ProcessingError { .. } => {
                ErrorSeverity::High
            }
            SavingsError::IoError(_) => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SavingsError::SourceOpenError { path, .. } => {
                format!("Cannot open input file '{}'", path)
            }
            SavingsError::CsvError(_) => "An input table could not be parsed".to_string(),
            SavingsError::IoError(_) => "A file could not be read or written".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command-line flags and the scenario TOML file"
            }
            ErrorCategory::Input => {
                "Verify the catalogue and composition file paths and their CSV contents"
            }
            ErrorCategory::Processing => "Inspect the logs for the offending record",
            ErrorCategory::Output => "Check permissions on the output location",
        }
    }
}

pub type Result<T> = std::result::Result<T, SavingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_errors_are_critical_input_errors() {
        let err = SavingsError::SourceOpenError {
            path: "plants_data.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("plants_data.csv"));
    }

    #[test]
    fn config_errors_map_to_configuration_category() {
        let err = SavingsError::MissingConfigError {
            field: "compositions".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
