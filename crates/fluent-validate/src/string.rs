//! String validation.

use crate::error::{ConfigError, Constraint, ConstraintError};
use crate::messages::{ErrorMessages, Verdict};
use serde::{Deserialize, Serialize};

/// Fluent validator for strings.
///
/// Lengths count characters (Unicode scalar values), not bytes. Checks run
/// minimum length, maximum length, then allowed characters, and stop at the
/// first failure.
///
/// ## Example
///
/// ```rust
/// use fluent_validate::StringValidator;
///
/// let digits = StringValidator::new()
///     .min_length(5)
///     .max_length_with_message(10, "Too long")
///     .allowed_chars("1234567890");
///
/// assert_eq!(digits.validate("1234567890"), Ok(true));
/// assert_eq!(digits.validate("1234"), Ok(false));
/// assert!(digits.validate("12345678901").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringValidator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allowed_chars: Option<String>,
    #[serde(default, skip_serializing_if = "ErrorMessages::is_empty")]
    error_messages: ErrorMessages,
}

impl StringValidator {
    /// Create a validator with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a validator from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the validator to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    // In-place configuration

    /// Set the minimum length.
    pub fn set_min_length(&mut self, min: usize, message: Option<String>) -> &mut Self {
        self.min_length = Some(min);
        self.error_messages.set(Constraint::MinLength, message);
        self
    }

    /// Set the maximum length.
    pub fn set_max_length(&mut self, max: usize, message: Option<String>) -> &mut Self {
        self.max_length = Some(max);
        self.error_messages.set(Constraint::MaxLength, message);
        self
    }

    /// Set the characters a value may contain.
    pub fn set_allowed_chars(
        &mut self,
        allowed: impl Into<String>,
        message: Option<String>,
    ) -> &mut Self {
        self.allowed_chars = Some(allowed.into());
        self.error_messages.set(Constraint::Allowed, message);
        self
    }

    // Chained configuration

    /// Set the minimum length.
    pub fn min_length(mut self, min: usize) -> Self {
        self.set_min_length(min, None);
        self
    }

    /// Set the minimum length with a custom error message.
    pub fn min_length_with_message(mut self, min: usize, message: impl Into<String>) -> Self {
        self.set_min_length(min, Some(message.into()));
        self
    }

    /// Set the maximum length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.set_max_length(max, None);
        self
    }

    /// Set the maximum length with a custom error message.
    pub fn max_length_with_message(mut self, max: usize, message: impl Into<String>) -> Self {
        self.set_max_length(max, Some(message.into()));
        self
    }

    /// Set the characters a value may contain.
    pub fn allowed_chars(mut self, allowed: impl Into<String>) -> Self {
        self.set_allowed_chars(allowed, None);
        self
    }

    /// Set the allowed characters with a custom error message.
    pub fn allowed_chars_with_message(
        mut self,
        allowed: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.set_allowed_chars(allowed, Some(message.into()));
        self
    }

    // Accessors

    /// The configured minimum length.
    pub fn min(&self) -> Option<usize> {
        self.min_length
    }

    /// The configured maximum length.
    pub fn max(&self) -> Option<usize> {
        self.max_length
    }

    /// The configured character set.
    pub fn allowed(&self) -> Option<&str> {
        self.allowed_chars.as_deref()
    }

    /// The per-constraint message table.
    pub fn messages(&self) -> &ErrorMessages {
        &self.error_messages
    }

    // Validation

    /// Check a value and report which constraint failed, if any.
    pub fn check(&self, value: &str) -> Verdict {
        let len = value.chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return self.fail(Constraint::MinLength, len);
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return self.fail(Constraint::MaxLength, len);
            }
        }

        if let Some(allowed) = &self.allowed_chars {
            if let Some(c) = value.chars().find(|c| !allowed.contains(*c)) {
                tracing::debug!(character = ?c, "character outside allowed set");
                return self.fail(Constraint::Allowed, len);
            }
        }

        tracing::trace!(len, "string passed validation");
        Verdict::Valid
    }

    /// Validate a value.
    ///
    /// Returns `Ok(false)` when a constraint without a message fails and
    /// `Err` carrying the message when a constraint with one fails.
    pub fn validate(&self, value: &str) -> Result<bool, ConstraintError> {
        self.check(value).into_result()
    }

    /// Check if a value passes, ignoring how failures are reported.
    pub fn is_valid(&self, value: &str) -> bool {
        self.check(value).is_valid()
    }

    fn fail(&self, constraint: Constraint, len: usize) -> Verdict {
        tracing::debug!(
            constraint = %constraint,
            explicit = self.error_messages.is_explicit(constraint),
            len,
            "string constraint failed"
        );
        self.error_messages.reject(constraint)
    }
}
