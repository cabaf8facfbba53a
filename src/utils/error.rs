use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdderError {
    #[error("Invalid argument `{field}` ({value:?}): {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Parse error in {field}: {message}")]
    ParseError { field: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Operand,
    Configuration,
    Input,
}

/// Field names that refer to a bit-string operand rather than a setting.
pub const OPERAND_FIELDS: [&str; 3] = ["a", "b", "value"];

fn is_operand_field(field: &str) -> bool {
    OPERAND_FIELDS.contains(&field)
}

impl AdderError {
    pub fn invalid_argument(field: &str, value: &str, reason: impl Into<String>) -> Self {
        AdderError::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AdderError::InvalidArgument { field, .. } if is_operand_field(field) => {
                ErrorCategory::Operand
            }
            AdderError::InvalidArgument { .. } => ErrorCategory::Configuration,
            AdderError::ConfigError { .. } => ErrorCategory::Configuration,
            AdderError::IoError(_)
            | AdderError::CsvError(_)
            | AdderError::SerializationError(_)
            | AdderError::ParseError { .. } => ErrorCategory::Input,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Operand => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Input => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AdderError::InvalidArgument { field, reason, .. } if is_operand_field(field) => {
                format!("Operand `{}` is not a bit string: {}", field, reason)
            }
            AdderError::InvalidArgument { field, reason, .. } => {
                format!("Invalid `{}`: {}", field, reason)
            }
            AdderError::IoError(e) => format!("Could not read input file: {}", e),
            AdderError::CsvError(e) => format!("Could not parse CSV input: {}", e),
            AdderError::SerializationError(e) => format!("Could not render output: {}", e),
            AdderError::ParseError { field, message } => {
                format!("Could not parse {}: {}", field, message)
            }
            AdderError::ConfigError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Operand => "Operands must be non-empty and contain only '0' and '1'",
            ErrorCategory::Configuration => {
                "Pass two operands, or --input with a .csv or .toml file"
            }
            ErrorCategory::Input => {
                "Check that the input file exists and lists pairs with `a` and `b` fields"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AdderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = AdderError::invalid_argument("b", "12", "unexpected character '2' at position 1");
        assert_eq!(
            err.to_string(),
            "Invalid argument `b` (\"12\"): unexpected character '2' at position 1"
        );
        assert_eq!(err.category(), ErrorCategory::Operand);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_non_operand_field_is_configuration() {
        let err = AdderError::invalid_argument("input", "", "path cannot be empty");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.user_friendly_message(), "Invalid `input`: path cannot be empty");

        let operand = AdderError::invalid_argument("value", "x", "unexpected character 'x' at position 0");
        assert_eq!(operand.exit_code(), 1);
        assert!(operand.user_friendly_message().starts_with("Operand `value`"));
    }

    #[test]
    fn test_categories_map_to_exit_codes() {
        let config = AdderError::ConfigError {
            message: "missing operand".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let io = AdderError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::Input);
        assert_eq!(io.exit_code(), 3);
        assert!(io.user_friendly_message().contains("gone"));
    }
}
