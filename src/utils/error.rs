use thiserror::Error;

/// A rejected form submission. The messages are shown to the user verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter yarn weight in grams")]
    MissingYarnWeight,

    #[error("Yarn weight cannot be negative")]
    NegativeYarnWeight,

    #[error("Additional packaging cost cannot be negative")]
    NegativeAdditionalPackaging,

    #[error("Custom margin cannot be negative")]
    NegativeCustomMargin,

    /// An entered amount, or one derived from it, does not fit the money type.
    #[error("{} is too large to price", field_label(.field))]
    AmountTooLarge { field: &'static str },
}

fn field_label(field: &str) -> &'static str {
    match field {
        "yarn_weight" => "Yarn weight",
        "additional_packaging" => "Additional packaging cost",
        "custom_margin" => "Custom margin",
        "addons" => "Add-on total",
        "subtotal" => "Subtotal",
        _ => "Final price",
    }
}

impl ValidationError {
    /// Name of the form field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingYarnWeight | ValidationError::NegativeYarnWeight => {
                "yarn_weight"
            }
            ValidationError::NegativeAdditionalPackaging => "additional_packaging",
            ValidationError::NegativeCustomMargin => "custom_margin",
            ValidationError::AmountTooLarge { field } => *field,
        }
    }
}

#[derive(Error, Debug)]
pub enum PricerError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown add-on: {name}")]
    UnknownAddon { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },
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

impl PricerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PricerError::Validation(_)
            | PricerError::UnknownAddon { .. }
            | PricerError::InvalidCommand { .. } => ErrorCategory::Input,
            PricerError::TomlError(_)
            | PricerError::ConfigError { .. }
            | PricerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PricerError::IoError(_)
            | PricerError::SerializationError(_)
            | PricerError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PricerError::Validation(e) => e.to_string(),
            PricerError::UnknownAddon { name } => {
                format!("There is no add-on called '{}'", name)
            }
            PricerError::IoError(e) => format!("Could not read or write a file: {}", e),
            PricerError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            PricerError::ConfigError { message } => message.clone(),
            PricerError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting {} = '{}' is invalid: {}", field, value, reason),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PricerError::Validation(_) => "Correct the highlighted field and calculate again",
            PricerError::UnknownAddon { .. } => {
                "Use --list-addons, or 'addons' in the shell, to see what is available"
            }
            PricerError::InvalidCommand { .. } => "Type 'help' to list the available commands",
            PricerError::TomlError(_)
            | PricerError::ConfigError { .. }
            | PricerError::InvalidConfigValueError { .. } => {
                "Check the configuration file against pricer-config.toml"
            }
            PricerError::IoError(_) => "Check that the path exists and is readable",
            PricerError::SerializationError(_) | PricerError::CsvError(_) => {
                "Try a different --format"
            }
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PricerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_fixed() {
        assert_eq!(
            ValidationError::MissingYarnWeight.to_string(),
            "Please enter yarn weight in grams"
        );
        assert_eq!(
            ValidationError::NegativeCustomMargin.to_string(),
            "Custom margin cannot be negative"
        );
        assert_eq!(
            ValidationError::AmountTooLarge { field: "yarn_weight" }.to_string(),
            "Yarn weight is too large to price"
        );
    }

    #[test]
    fn exit_codes_follow_severity() {
        let rejected = PricerError::from(ValidationError::NegativeYarnWeight);
        assert_eq!(rejected.exit_code(), 2);
        assert_eq!(rejected.user_friendly_message(), "Yarn weight cannot be negative");

        let config = PricerError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);
    }
}
