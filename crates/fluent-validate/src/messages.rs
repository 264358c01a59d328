//! Per-constraint error messages and validation outcomes.
//!
//! Each constraint a validator knows about may carry a custom message.
//! When a constraint fails, the message decides how the failure is reported:
//!
//! - no message: silent failure, `validate` returns `Ok(false)`
//! - message: explicit failure, `validate` returns `Err(ConstraintError)`

use crate::error::{Constraint, ConstraintError};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Table of custom messages keyed by constraint.
///
/// Setting a constraint's message to `None` removes it, so "no message" has
/// a single representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMessages {
    messages: BTreeMap<Constraint, String>,
}

impl ErrorMessages {
    /// Create an empty message table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or clear, with `None`) the message for a constraint.
    pub fn set(&mut self, constraint: Constraint, message: Option<String>) {
        match message {
            Some(message) => {
                self.messages.insert(constraint, message);
            }
            None => {
                self.messages.remove(&constraint);
            }
        }
    }

    /// The message configured for a constraint, if any.
    pub fn get(&self, constraint: Constraint) -> Option<&str> {
        self.messages.get(&constraint).map(String::as_str)
    }

    /// Check if a constraint reports failures explicitly.
    pub fn is_explicit(&self, constraint: Constraint) -> bool {
        self.get(constraint).is_some()
    }

    /// Check if no constraint carries a message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Build the outcome for a failed constraint.
    pub fn reject(&self, constraint: Constraint) -> Verdict {
        match self.get(constraint) {
            Some(message) => Verdict::Rejected(ConstraintError::new(constraint, message)),
            None => Verdict::Invalid { constraint },
        }
    }
}

// Explicit nulls are accepted and mean "no message".
impl<'de> Deserialize<'de> for ErrorMessages {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<Constraint, Option<String>>::deserialize(deserializer)?;
        let messages = raw
            .into_iter()
            .filter_map(|(constraint, message)| message.map(|m| (constraint, m)))
            .collect();
        Ok(Self { messages })
    }
}

/// Outcome of checking a value against a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every configured constraint passed.
    Valid,
    /// A constraint without a message failed.
    Invalid {
        /// The first failing constraint
        constraint: Constraint,
    },
    /// A constraint with a message failed.
    Rejected(ConstraintError),
}

impl Verdict {
    /// Check if the value passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The failing constraint, if any.
    pub fn constraint(&self) -> Option<Constraint> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid { constraint } => Some(*constraint),
            Verdict::Rejected(err) => Some(err.constraint),
        }
    }

    /// Collapse into the boolean-or-error form returned by `validate`.
    pub fn into_result(self) -> Result<bool, ConstraintError> {
        match self {
            Verdict::Valid => Ok(true),
            Verdict::Invalid { .. } => Ok(false),
            Verdict::Rejected(err) => Err(err),
        }
    }
}
