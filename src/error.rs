//! Error types for jobwire.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid job field: {0}")]
    Field(#[from] FieldError),

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Which job field a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Size,
    Bulbs,
    Outlets,
}

impl Field {
    /// Operator-facing label used in diagnostics.
    fn label(self) -> &'static str {
        match self {
            Field::Size => "size",
            Field::Bulbs => "number of bulbs",
            Field::Outlets => "number of outlets",
        }
    }
}

/// Rejected operator input for a single job field.
///
/// The `Display` text is exactly what the operator sees before the prompt is
/// repeated, so keep it in sync with the prompts in `intake`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Invalid building type. Please enter House, Barn, or Garage.")]
    UnknownBuildingType(String),

    #[error("{}", range_message(.field, .min, .max))]
    NotANumber {
        field: Field,
        input: String,
        min: u32,
        max: u32,
    },

    #[error("{}", range_message(.field, .min, .max))]
    OutOfRange {
        field: Field,
        value: i64,
        min: u32,
        max: u32,
    },

    #[error("Invalid credit card number. Please enter exactly 16 digits.")]
    InvalidCard,
}

fn range_message(field: &Field, min: &u32, max: &u32) -> String {
    match field {
        Field::Size => format!(
            "Invalid {}. Please enter a value between {} and {}.",
            field.label(),
            min,
            max
        ),
        Field::Bulbs | Field::Outlets => format!(
            "Invalid {}. Please enter a number between {} and {}.",
            field.label(),
            min,
            max
        ),
    }
}
