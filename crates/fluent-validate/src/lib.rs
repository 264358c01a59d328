//! # fluent-validate
//!
//! Fluent builder validators for primitive values. Build a
//! [`NumberValidator`] or [`StringValidator`] by chaining constraint calls,
//! then validate as many values as you like.
//!
//! ## Example
//!
//! ```rust
//! use fluent_validate::prelude::*;
//!
//! let age = NumberValidator::new()
//!     .bounds(18, 120)
//!     .number_type_with_message(NumberKind::Integer, "Age must be a whole number");
//!
//! assert_eq!(age.validate(30), Ok(true));
//! assert_eq!(age.validate(12), Ok(false));
//! assert_eq!(
//!     age.validate(30.5).unwrap_err().to_string(),
//!     "Age must be a whole number"
//! );
//! ```
//!
//! ## Failure Reporting
//!
//! Every constraint setter has a `*_with_message` twin. The message decides
//! how that constraint reports failure:
//!
//! - no message: `validate` returns `Ok(false)`
//! - message: `validate` returns `Err(ConstraintError)` with the message
//!
//! Only the first failing constraint is reported. Use `check` to get a
//! [`Verdict`] that names the failing constraint in both modes.
//!
//! ## Configuration
//!
//! Validators serialize to and from JSON:
//!
//! ```json
//! { "minLength": 3, "maxLength": 20, "errorMessages": { "max": "Too long" } }
//! ```

mod error;
mod messages;
mod number;
mod string;

pub use error::{ConfigError, Constraint, ConstraintError};
pub use messages::{ErrorMessages, Verdict};
pub use number::{Number, NumberKind, NumberValidator, TypeTag};
pub use string::StringValidator;

/// Prelude module for validation
pub mod prelude {
    pub use crate::error::{ConfigError, Constraint, ConstraintError};
    pub use crate::messages::{ErrorMessages, Verdict};
    pub use crate::number::{Number, NumberKind, NumberValidator, TypeTag};
    pub use crate::string::StringValidator;
}
