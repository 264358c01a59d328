//! Numeric validation.
//!
//! [`NumberValidator`] checks a [`Number`] against an inclusive lower bound,
//! an inclusive upper bound and a required [`TypeTag`], in that order.

use crate::error::{ConfigError, Constraint, ConstraintError};
use crate::messages::{ErrorMessages, Verdict};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The runtime kind of a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// A whole number
    Integer,
    /// A floating-point number
    Float,
}

/// A numeric value that remembers whether it is an integer or a float.
///
/// `Integer(3)` and `Float(3.0)` are different values as far as type checks
/// go, but compare equal against bounds. Integers above `i64::MAX` are held
/// as [`Number::Unsigned`]; the `From` conversions only produce that variant
/// for such values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// A whole number
    Integer(i64),
    /// A whole number above `i64::MAX`
    Unsigned(u64),
    /// A floating-point number
    Float(f64),
}

// 2^64 and -2^63, both exactly representable as f64.
const INT_CEILING: f64 = 18_446_744_073_709_551_616.0;
const INT_FLOOR: f64 = -9_223_372_036_854_775_808.0;

impl Number {
    /// The kind of this value.
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Integer(_) | Number::Unsigned(_) => NumberKind::Integer,
            Number::Float(_) => NumberKind::Float,
        }
    }

    /// The value widened to `f64`, rounding large integers.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Unsigned(u) => u as f64,
            Number::Float(f) => f,
        }
    }

    fn as_i128(&self) -> Option<i128> {
        match *self {
            Number::Integer(i) => Some(i128::from(i)),
            Number::Unsigned(u) => Some(i128::from(u)),
            Number::Float(_) => None,
        }
    }

    /// Exact numeric ordering across kinds.
    ///
    /// Integers are never rounded through `f64`, so `2^53 + 1` is greater
    /// than `2^53 as f64`. NaN is unordered against everything.
    pub fn compare(&self, other: &Number) -> Option<Ordering> {
        match (self.as_i128(), other.as_i128()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (Some(a), None) => compare_int_float(a, other.as_f64()),
            (None, Some(b)) => compare_int_float(b, self.as_f64()).map(Ordering::reverse),
            (None, None) => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

fn compare_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    // Every integer held by a Number lies in [-2^63, 2^64).
    if float >= INT_CEILING {
        return Some(Ordering::Less);
    }
    if float < INT_FLOOR {
        return Some(Ordering::Greater);
    }
    // In range, the floor is an exact integer.
    let floor = float.floor();
    match int.cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Unsigned(u) => write!(f, "{u}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::Unsigned(value),
        }
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        match u64::try_from(value) {
            Ok(u) => Number::from(u),
            Err(_) => Number::Unsigned(u64::MAX),
        }
    }
}

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) if value < 0 => Number::Integer(i64::MIN),
            Err(_) => Number::Unsigned(u64::MAX),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// The numeric kind a validator requires.
///
/// Tags are not checked when configured: an unrecognized tag is kept as-is
/// and simply never matches. Use [`TypeTag::parse_strict`] to reject it up
/// front instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeTag {
    /// Only integers pass
    Integer,
    /// Only floats pass
    Float,
    /// A tag that matches no value
    Unrecognized(String),
}

impl TypeTag {
    /// Parse a tag, keeping unknown names as [`TypeTag::Unrecognized`].
    pub fn parse(tag: &str) -> Self {
        match tag {
            "integer" | "int" => TypeTag::Integer,
            "float" => TypeTag::Float,
            other => TypeTag::Unrecognized(other.to_string()),
        }
    }

    /// Parse a tag, failing on unknown names.
    pub fn parse_strict(tag: &str) -> Result<Self, ConfigError> {
        match Self::parse(tag) {
            TypeTag::Unrecognized(name) => Err(ConfigError::UnknownType(name)),
            known => Ok(known),
        }
    }

    /// Check if a value of `kind` satisfies this tag.
    pub fn matches(&self, kind: NumberKind) -> bool {
        matches!(
            (self, kind),
            (TypeTag::Integer, NumberKind::Integer) | (TypeTag::Float, NumberKind::Float)
        )
    }

    /// The tag name.
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Integer => "integer",
            TypeTag::Float => "float",
            TypeTag::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NumberKind> for TypeTag {
    fn from(kind: NumberKind) -> Self {
        match kind {
            NumberKind::Integer => TypeTag::Integer,
            NumberKind::Float => TypeTag::Float,
        }
    }
}

impl From<&str> for TypeTag {
    fn from(tag: &str) -> Self {
        TypeTag::parse(tag)
    }
}

impl From<String> for TypeTag {
    fn from(tag: String) -> Self {
        TypeTag::parse(&tag)
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        match tag {
            TypeTag::Unrecognized(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Fluent validator for numbers.
///
/// Bounds are inclusive. Checks run lower bound, upper bound, then type, and
/// stop at the first failure.
///
/// ## Example
///
/// ```rust
/// use fluent_validate::{NumberKind, NumberValidator};
///
/// let validator = NumberValidator::new()
///     .bounds(5, 10)
///     .number_type(NumberKind::Integer);
///
/// assert_eq!(validator.validate(7), Ok(true));
/// assert_eq!(validator.validate(11), Ok(false));
/// assert_eq!(validator.validate(7.5), Ok(false));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberValidator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lower_bound: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    upper_bound: Option<Number>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    number_type: Option<TypeTag>,
    #[serde(default, skip_serializing_if = "ErrorMessages::is_empty")]
    error_messages: ErrorMessages,
}

impl NumberValidator {
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

    /// Set the inclusive lower bound.
    pub fn set_lower_bound(
        &mut self,
        value: impl Into<Number>,
        message: Option<String>,
    ) -> &mut Self {
        self.lower_bound = Some(value.into());
        self.error_messages.set(Constraint::LowerBound, message);
        self
    }

    /// Set the inclusive upper bound.
    pub fn set_upper_bound(
        &mut self,
        value: impl Into<Number>,
        message: Option<String>,
    ) -> &mut Self {
        self.upper_bound = Some(value.into());
        self.error_messages.set(Constraint::UpperBound, message);
        self
    }

    /// Set both bounds, both inclusive, sharing one message.
    pub fn set_bounds(
        &mut self,
        lower: impl Into<Number>,
        upper: impl Into<Number>,
        message: Option<String>,
    ) -> &mut Self {
        self.set_lower_bound(lower, message.clone());
        self.set_upper_bound(upper, message)
    }

    /// Set the required numeric kind.
    pub fn set_type(&mut self, tag: impl Into<TypeTag>, message: Option<String>) -> &mut Self {
        self.number_type = Some(tag.into());
        self.error_messages.set(Constraint::Type, message);
        self
    }

    /// Set the required numeric kind, rejecting unknown tags.
    pub fn set_type_strict(
        &mut self,
        tag: &str,
        message: Option<String>,
    ) -> Result<&mut Self, ConfigError> {
        let tag = TypeTag::parse_strict(tag)?;
        Ok(self.set_type(tag, message))
    }

    // Chained configuration

    /// Set the inclusive lower bound.
    pub fn lower_bound(mut self, value: impl Into<Number>) -> Self {
        self.set_lower_bound(value, None);
        self
    }

    /// Set the inclusive lower bound with a custom error message.
    pub fn lower_bound_with_message(
        mut self,
        value: impl Into<Number>,
        message: impl Into<String>,
    ) -> Self {
        self.set_lower_bound(value, Some(message.into()));
        self
    }

    /// Set the inclusive upper bound.
    pub fn upper_bound(mut self, value: impl Into<Number>) -> Self {
        self.set_upper_bound(value, None);
        self
    }

    /// Set the inclusive upper bound with a custom error message.
    pub fn upper_bound_with_message(
        mut self,
        value: impl Into<Number>,
        message: impl Into<String>,
    ) -> Self {
        self.set_upper_bound(value, Some(message.into()));
        self
    }

    /// Set both inclusive bounds.
    pub fn bounds(mut self, lower: impl Into<Number>, upper: impl Into<Number>) -> Self {
        self.set_bounds(lower, upper, None);
        self
    }

    /// Set both inclusive bounds with one custom error message.
    pub fn bounds_with_message(
        mut self,
        lower: impl Into<Number>,
        upper: impl Into<Number>,
        message: impl Into<String>,
    ) -> Self {
        self.set_bounds(lower, upper, Some(message.into()));
        self
    }

    /// Require a numeric kind.
    pub fn number_type(mut self, tag: impl Into<TypeTag>) -> Self {
        self.set_type(tag, None);
        self
    }

    /// Require a numeric kind with a custom error message.
    pub fn number_type_with_message(
        mut self,
        tag: impl Into<TypeTag>,
        message: impl Into<String>,
    ) -> Self {
        self.set_type(tag, Some(message.into()));
        self
    }

    /// Require a numeric kind, rejecting unknown tags.
    pub fn number_type_strict(mut self, tag: &str) -> Result<Self, ConfigError> {
        self.set_type_strict(tag, None)?;
        Ok(self)
    }

    // Accessors

    /// The configured lower bound.
    pub fn lower(&self) -> Option<Number> {
        self.lower_bound
    }

    /// The configured upper bound.
    pub fn upper(&self) -> Option<Number> {
        self.upper_bound
    }

    /// The configured type tag.
    pub fn required_type(&self) -> Option<&TypeTag> {
        self.number_type.as_ref()
    }

    /// The per-constraint message table.
    pub fn messages(&self) -> &ErrorMessages {
        &self.error_messages
    }

    // Validation

    /// Check a value and report which constraint failed, if any.
    pub fn check(&self, value: impl Into<Number>) -> Verdict {
        let value = value.into();

        if let Some(lower) = &self.lower_bound {
            if value.compare(lower) == Some(Ordering::Less) {
                return self.fail(Constraint::LowerBound, value);
            }
        }

        if let Some(upper) = &self.upper_bound {
            if value.compare(upper) == Some(Ordering::Greater) {
                return self.fail(Constraint::UpperBound, value);
            }
        }

        if let Some(tag) = &self.number_type {
            if !tag.matches(value.kind()) {
                return self.fail(Constraint::Type, value);
            }
        }

        tracing::trace!(value = %value, "number passed validation");
        Verdict::Valid
    }

    /// Validate a value.
    ///
    /// Returns `Ok(false)` when a constraint without a message fails and
    /// `Err` carrying the message when a constraint with one fails.
    pub fn validate(&self, value: impl Into<Number>) -> Result<bool, ConstraintError> {
        self.check(value).into_result()
    }

    /// Check if a value passes, ignoring how failures are reported.
    pub fn is_valid(&self, value: impl Into<Number>) -> bool {
        self.check(value).is_valid()
    }

    fn fail(&self, constraint: Constraint, value: Number) -> Verdict {
        tracing::debug!(
            constraint = %constraint,
            explicit = self.error_messages.is_explicit(constraint),
            value = %value,
            "number constraint failed"
        );
        self.error_messages.reject(constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_accepts_anything() {
        let validator = NumberValidator::new();
        assert_eq!(validator.validate(0), Ok(true));
        assert_eq!(validator.validate(-3.5), Ok(true));
        assert_eq!(validator.validate(f64::NAN), Ok(true));
    }

    #[test]
    fn bounds_are_inclusive() {
        let validator = NumberValidator::new().lower_bound(5).upper_bound(10);
        assert_eq!(validator.validate(5), Ok(true));
        assert_eq!(validator.validate(10), Ok(true));
        assert_eq!(validator.validate(4), Ok(false));
        assert_eq!(validator.validate(11), Ok(false));
    }

    #[test]
    fn set_bounds_upper_is_inclusive() {
        let validator = NumberValidator::new().bounds(5, 10);
        assert_eq!(validator.validate(10), Ok(true));
        assert_eq!(validator.validate(10.5), Ok(false));
    }

    #[test]
    fn zero_bound_is_not_unset() {
        let validator = NumberValidator::new().lower_bound(0);
        assert_eq!(validator.validate(-1), Ok(false));
        assert_eq!(validator.validate(0), Ok(true));
    }

    #[test]
    fn mixed_kind_comparison() {
        let validator = NumberValidator::new().bounds(1.5, 3);
        assert_eq!(validator.validate(1), Ok(false));
        assert_eq!(validator.validate(2), Ok(true));
        assert_eq!(validator.validate(3.0), Ok(true));
        assert_eq!(validator.validate(3.01), Ok(false));
    }

    #[test]
    fn large_integers_compare_exactly() {
        let validator = NumberValidator::new().upper_bound(i64::MAX - 1);
        assert_eq!(validator.validate(i64::MAX), Ok(false));
    }

    #[test]
    fn type_tags_distinguish_kinds() {
        let integer = NumberValidator::new().number_type("integer");
        assert_eq!(integer.validate(3), Ok(true));
        assert_eq!(integer.validate(3.0), Ok(false));

        let float = NumberValidator::new().number_type(NumberKind::Float);
        assert_eq!(float.validate(3.0), Ok(true));
        assert_eq!(float.validate(3), Ok(false));
    }

    #[test]
    fn unrecognized_tag_never_matches() {
        let validator = NumberValidator::new().number_type("decimal");
        assert_eq!(
            validator.required_type(),
            Some(&TypeTag::Unrecognized("decimal".to_string()))
        );
        assert_eq!(validator.validate(1), Ok(false));
        assert_eq!(validator.validate(1.0), Ok(false));
    }

    #[test]
    fn strict_tag_rejects_unknown() {
        let err = NumberValidator::new().number_type_strict("decimal").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownType(ref t) if t == "decimal"));

        let validator = NumberValidator::new().number_type_strict("int").unwrap();
        assert_eq!(validator.required_type(), Some(&TypeTag::Integer));
    }

    #[test]
    fn lower_bound_checked_before_type() {
        let validator = NumberValidator::new()
            .lower_bound_with_message(10, "Too small")
            .number_type_with_message("integer", "Not an integer");
        let err = validator.validate(2.5).unwrap_err();
        assert_eq!(err.constraint, Constraint::LowerBound);
        assert_eq!(err.message, "Too small");
    }

    #[test]
    fn explicit_message_only_for_its_constraint() {
        let validator = NumberValidator::new()
            .lower_bound(0)
            .upper_bound_with_message(10, "Too big");
        assert_eq!(validator.validate(-1), Ok(false));
        assert_eq!(
            validator.validate(11),
            Err(ConstraintError::new(Constraint::UpperBound, "Too big"))
        );
    }

    #[test]
    fn bounds_share_message() {
        let validator = NumberValidator::new().bounds_with_message(0, 1, "Out of range");
        assert_eq!(validator.validate(-1).unwrap_err().message, "Out of range");
        assert_eq!(validator.validate(2).unwrap_err().message, "Out of range");
    }

    #[test]
    fn reconfiguring_clears_message() {
        let mut validator = NumberValidator::new().lower_bound_with_message(5, "Too small");
        validator.set_lower_bound(3, None);
        assert_eq!(validator.lower(), Some(Number::Integer(3)));
        assert_eq!(validator.validate(2), Ok(false));
        assert_eq!(validator.validate(4), Ok(true));
    }

    #[test]
    fn in_place_setters_chain_on_one_instance() {
        let mut validator = NumberValidator::new();
        validator
            .set_lower_bound(1, None)
            .set_upper_bound(2, None)
            .set_type(NumberKind::Integer, None);
        assert_eq!(validator.lower(), Some(Number::Integer(1)));
        assert_eq!(validator.upper(), Some(Number::Integer(2)));
        assert_eq!(validator.validate(2), Ok(true));
        assert_eq!(validator.validate(1.5), Ok(false));
    }

    #[test]
    fn nan_passes_bounds_but_not_integer_type() {
        let validator = NumberValidator::new().bounds(0, 1);
        assert!(validator.is_valid(f64::NAN));

        let typed = validator.number_type("integer");
        assert!(!typed.is_valid(f64::NAN));
    }

    #[test]
    fn check_names_silent_failure() {
        let validator = NumberValidator::new().upper_bound(1);
        assert_eq!(
            validator.check(2),
            Verdict::Invalid {
                constraint: Constraint::UpperBound
            }
        );
    }

    #[test]
    fn json_round_trip_keeps_kinds() {
        let validator = NumberValidator::new()
            .lower_bound(1.0)
            .upper_bound_with_message(10, "Too big")
            .number_type("float");

        let json = validator.to_json().unwrap();
        assert!(json.contains("\"lowerBound\":1.0"));
        assert!(json.contains("\"type\":\"float\""));

        let restored = NumberValidator::from_json(&json).unwrap();
        assert_eq!(restored, validator);
        assert_eq!(restored.lower(), Some(Number::Float(1.0)));
    }

    #[test]
    fn from_json_config() {
        let validator = NumberValidator::from_json(
            r#"{"lowerBound": 18, "upperBound": 120, "type": "int", "errorMessages": {"type": "Age must be whole"}}"#,
        )
        .unwrap();

        assert_eq!(validator.validate(30), Ok(true));
        assert_eq!(validator.validate(121), Ok(false));
        assert_eq!(validator.validate(30.5).unwrap_err().message, "Age must be whole");
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = NumberValidator::from_json(r#"{"lowerBound": "five"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn integer_above_float_bound_at_2_pow_53() {
        let validator = NumberValidator::new().upper_bound(9_007_199_254_740_992.0);
        assert_eq!(validator.validate(9_007_199_254_740_992i64), Ok(true));
        assert_eq!(validator.validate(9_007_199_254_740_993i64), Ok(false));

        let validator = NumberValidator::new().lower_bound(9_007_199_254_740_992.0);
        assert_eq!(validator.validate(9_007_199_254_740_991i64), Ok(false));
    }

    #[test]
    fn float_value_against_integer_bound_at_2_pow_53() {
        let validator = NumberValidator::new().lower_bound(9_007_199_254_740_993i64);
        assert_eq!(validator.validate(9_007_199_254_740_992.0), Ok(false));
    }

    #[test]
    fn int_float_compare_edges() {
        let int = Number::from(3);
        assert_eq!(int.compare(&Number::from(3.0)), Some(Ordering::Equal));
        assert_eq!(int.compare(&Number::from(3.5)), Some(Ordering::Less));
        assert_eq!(int.compare(&Number::from(2.5)), Some(Ordering::Greater));
        assert_eq!(Number::from(-3).compare(&Number::from(-2.5)), Some(Ordering::Less));
        assert_eq!(int.compare(&Number::from(f64::NAN)), None);
        assert_eq!(int.compare(&Number::from(f64::INFINITY)), Some(Ordering::Less));
        assert_eq!(
            Number::from(i64::MIN).compare(&Number::from(f64::NEG_INFINITY)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::from(u64::MAX).compare(&Number::from(1.0e20)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn validates_machine_sized_and_unsigned_integers() {
        let items = vec![1, 2, 3];
        let validator = NumberValidator::new()
            .bounds(1, 5)
            .number_type(NumberKind::Integer);
        assert_eq!(validator.validate(items.len()), Ok(true));
        assert_eq!(validator.validate(-2isize), Ok(false));

        assert_eq!(Number::from(7u64), Number::Integer(7));
        assert_eq!(Number::from(u64::MAX), Number::Unsigned(u64::MAX));

        let huge = NumberValidator::new()
            .lower_bound(i64::MAX)
            .number_type("integer");
        assert_eq!(huge.validate(u64::MAX), Ok(true));
        assert_eq!(NumberValidator::new().upper_bound(i64::MAX).validate(u64::MAX), Ok(false));
    }

    #[test]
    fn unsigned_round_trips_through_json() {
        let validator = NumberValidator::new().upper_bound(u64::MAX);
        let json = validator.to_json().unwrap();
        assert!(json.contains("18446744073709551615"));
        assert_eq!(NumberValidator::from_json(&json).unwrap(), validator);
    }

    #[test]
    fn number_display_keeps_kind() {
        assert_eq!(Number::from(3).to_string(), "3");
        assert_eq!(Number::from(3.0).to_string(), "3.0");
    }
}
