//! Error types raised by validators.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single named constraint a validator may have configured.
///
/// The serialized names double as the keys of the per-constraint
/// message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Constraint {
    /// Inclusive numeric minimum
    #[serde(rename = "lowerBound")]
    LowerBound,
    /// Inclusive numeric maximum
    #[serde(rename = "upperBound")]
    UpperBound,
    /// Required numeric kind
    #[serde(rename = "type")]
    Type,
    /// Minimum string length in characters
    #[serde(rename = "min")]
    MinLength,
    /// Maximum string length in characters
    #[serde(rename = "max")]
    MaxLength,
    /// Permitted character set
    #[serde(rename = "allowed")]
    Allowed,
}

impl Constraint {
    /// The constraint key, e.g. `"lowerBound"` or `"min"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Constraint::LowerBound => "lowerBound",
            Constraint::UpperBound => "upperBound",
            Constraint::Type => "type",
            Constraint::MinLength => "min",
            Constraint::MaxLength => "max",
            Constraint::Allowed => "allowed",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a constraint with a configured message fails.
///
/// Displays as the configured message text, nothing more.
///
/// ## Example
///
/// ```rust
/// use fluent_validate::NumberValidator;
///
/// let validator = NumberValidator::new().upper_bound_with_message(10, "Too big");
/// let err = validator.validate(11).unwrap_err();
/// assert_eq!(err.to_string(), "Too big");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ConstraintError {
    /// The constraint that failed
    #[serde(rename = "code")]
    pub constraint: Constraint,
    /// The message supplied when the constraint was configured
    pub message: String,
}

impl ConstraintError {
    /// Create a new constraint error.
    pub fn new(constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            constraint,
            message: message.into(),
        }
    }

    /// The configured message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while building a validator from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The type tag is neither an integer nor a float tag.
    #[error("unknown number type `{0}`, expected `integer` or `float`")]
    UnknownType(String),

    /// The validator could not be (de)serialized.
    #[error("invalid validator configuration: {0}")]
    Json(#[from] serde_json::Error),
}
