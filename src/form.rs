//! Admission form validation.
//!
//! A form record is a loosely typed object with seven fields (see [`Field`]).
//! Each field is checked on its own rule and every failure is reported, so a
//! single call surfaces all problems at once.
//!
//! ```rust
//! use desi_text::{record, validate_form, Field};
//!
//! let form = record!({
//!     "name": "Rahul Sharma",
//!     "email": "rahul@gmail.com",
//!     "phone": "9876543210",
//!     "age": "17",
//!     "pincode": "400001",
//!     "state": "Maharashtra",
//!     "agreeTerms": false
//! });
//!
//! let result = validate_form(&form).unwrap();
//! assert!(!result.is_valid());
//! assert_eq!(result.failed_fields().collect::<Vec<_>>(), vec![Field::AgreeTerms]);
//! assert_eq!(result.message(Field::AgreeTerms), Some("Must agree to terms"));
//! ```
//!
//! ## Field rules
//!
//! | field | valid when |
//! |---|---|
//! | `name` | string, no surrounding whitespace, 2 to 50 characters (Unicode scalar values, so `"😂"` is 1) |
//! | `email` | string with exactly one `@` and a `.` somewhere after it |
//! | `phone` | 10 ASCII digits, first digit 6, 7, 8 or 9 |
//! | `age` | numeric coercion is an integer in 16..=100 (`""` is rejected) |
//! | `pincode` | string; once trimmed, 6 ASCII digits not starting with `0` (no numeric coercion, so `"1.2345"` fails) |
//! | `state` | non-empty string (`null`, absent and non-string values such as `42` fail) |
//! | `agreeTerms` | truthy |
//!
//! A field with the wrong type fails its rule. An absent field fails the same
//! way, and this includes `pincode`.

use crate::{Error, FieldMap, Result, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven fields of a form record, in reporting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Age,
    Pincode,
    State,
    AgreeTerms,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Age,
        Field::Pincode,
        Field::State,
        Field::AgreeTerms,
    ];

    /// Key of this field in a form record.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Age => "age",
            Field::Pincode => "pincode",
            Field::State => "state",
            Field::AgreeTerms => "agreeTerms",
        }
    }

    /// Error message reported when this field fails.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Field::Name => "Name must be 2-50 characters",
            Field::Email => "Invalid email format",
            Field::Phone => "Invalid Indian phone number",
            Field::Age => "Age must be an integer between 16 and 100",
            Field::Pincode => "Invalid Indian pincode",
            Field::State => "State is required",
            Field::AgreeTerms => "Must agree to terms",
        }
    }

    /// Applies this field's rule. `None` means the field is absent from the record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desi_text::{Field, Value};
    ///
    /// assert!(Field::Phone.is_valid(Some(&Value::from("9876543210"))));
    /// assert!(!Field::Phone.is_valid(Some(&Value::from("5876543210"))));
    /// assert!(!Field::Pincode.is_valid(None));
    /// ```
    #[must_use]
    pub fn is_valid(self, value: Option<&Value>) -> bool {
        match self {
            Field::Name => value.and_then(Value::as_str).is_some_and(valid_name),
            Field::Email => value.and_then(Value::as_str).is_some_and(valid_email),
            Field::Phone => value.and_then(Value::as_str).is_some_and(valid_phone),
            Field::Age => value.is_some_and(valid_age),
            Field::Pincode => value.and_then(Value::as_str).is_some_and(valid_pincode),
            // Only strings are presence-checked; a number or bool is not a state.
            Field::State => value.and_then(Value::as_str).is_some_and(|s| !s.is_empty()),
            Field::AgreeTerms => value.is_some_and(Value::is_truthy),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| Error::unknown_field(s))
    }
}

/// Length is in Unicode scalar values, not UTF-16 units.
fn valid_name(name: &str) -> bool {
    name == name.trim() && (2..=50).contains(&name.chars().count())
}

fn valid_email(email: &str) -> bool {
    email.split('@').count() == 2
        && email
            .rfind('@')
            .is_some_and(|at| email[at..].contains('.'))
}

fn valid_phone(phone: &str) -> bool {
    phone.len() == 10
        && phone.bytes().all(|b| b.is_ascii_digit())
        && matches!(phone.as_bytes()[0], b'6'..=b'9')
}

fn valid_age(age: &Value) -> bool {
    if age.as_str() == Some("") {
        return false;
    }
    let n = age.to_number();
    n.is_finite() && n.fract() == 0.0 && (16.0..=100.0).contains(&n)
}

fn valid_pincode(pincode: &str) -> bool {
    let pincode = pincode.trim();
    pincode.len() == 6
        && pincode.bytes().all(|b| b.is_ascii_digit())
        && !pincode.starts_with('0')
}

/// Outcome of validating a form record.
///
/// `is_valid()` is `true` exactly when `errors()` is empty. Only failed fields
/// appear in `errors()`, each with its [`Field::message`].
///
/// Serializes as `{"isValid": bool, "errors": {"field": "message", ...}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: IndexMap<Field, &'static str>,
}

impl ValidationResult {
    fn from_errors(errors: IndexMap<Field, &'static str>) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failed fields mapped to their messages, in [`Field::ALL`] order.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<Field, &'static str> {
        &self.errors
    }

    /// Message for `field`, or `None` if it passed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn failed_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }
}

/// Validates a form value. Returns `None` only when the value is not an object.
#[must_use]
pub fn validate_form(input: &Value) -> Option<ValidationResult> {
    try_validate_form(input).ok()
}

/// Validates a form value.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when the value is not an object.
pub fn try_validate_form(input: &Value) -> Result<ValidationResult> {
    match input.as_object() {
        Some(record) => Ok(validate_record(record)),
        None => {
            tracing::debug!(found = input.type_name(), "form input is not an object");
            Err(Error::type_mismatch("object", input.type_name()))
        }
    }
}

/// Validates an already-unwrapped form record.
#[must_use]
pub fn validate_record(record: &FieldMap) -> ValidationResult {
    let errors: IndexMap<Field, &'static str> = Field::ALL
        .into_iter()
        .filter(|field| !field.is_valid(record.get(field.key())))
        .map(|field| (field, field.message()))
        .collect();

    if errors.is_empty() {
        tracing::trace!("form record passed validation");
    } else {
        let failed: Vec<&str> = errors.keys().map(|f| f.key()).collect();
        tracing::debug!(?failed, "form record failed validation");
    }
    ValidationResult::from_errors(errors)
}
