use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispenserError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write report line '{message}': {source}")]
    ReportWriteError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Report,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DispenserError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DispenserError::IoError(_) | DispenserError::SerializationError(_) => ErrorCategory::Io,
            DispenserError::ReportWriteError { .. } => ErrorCategory::Report,
            DispenserError::ConfigParseError { .. }
            | DispenserError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DispenserError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 報表寫入失敗時飲料已經送出，只是稽核紀錄缺一行
            DispenserError::ReportWriteError { .. } => ErrorSeverity::Medium,
            DispenserError::ConfigParseError { .. }
            | DispenserError::InvalidConfigValueError { .. }
            | DispenserError::ValidationError { .. } => ErrorSeverity::High,
            DispenserError::IoError(_) | DispenserError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check file permissions and available disk space",
            ErrorCategory::Report => "Make sure the report path is writable, then retry",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::Input => "Orders look like SIZE[:SUGAR], e.g. medium:2",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DispenserError::ReportWriteError { message, .. } => {
                format!("'{}' could not be written to the report", message)
            }
            DispenserError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            DispenserError::ConfigParseError { message } => {
                format!("Could not read configuration: {}", message)
            }
            DispenserError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DispenserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_write_error_is_medium() {
        let err = DispenserError::ReportWriteError {
            message: "Error: No cups left".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::Report);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("Error: No cups left"));
    }

    #[test]
    fn test_config_errors_are_high() {
        let err = DispenserError::InvalidConfigValueError {
            field: "report.path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "Invalid setting report.path: Path cannot be empty"
        );
    }
}
