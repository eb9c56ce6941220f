//! Identifier masking.
//!
//! A 12-digit identifier (for example an Aadhaar number) is reduced to its
//! last four digits, with everything before them replaced by a mask character
//! and the result grouped in fours:
//!
//! ```rust
//! use desi_text::{mask_identifier, INVALID};
//!
//! assert_eq!(mask_identifier("123456781234"), "XXXX-XXXX-1234");
//! assert_eq!(mask_identifier(" 123456781234\n"), "XXXX-XXXX-1234");
//! assert_eq!(mask_identifier("9876"), INVALID);
//! ```
//!
//! Malformed input never yields a partially masked string.

use crate::{Error, MaskOptions, Result, Value};

/// Returned by [`mask_identifier`] for anything that is not a well-formed identifier.
pub const INVALID: &str = "INVALID";

/// Masks an identifier with the default options, or returns [`INVALID`].
#[must_use]
pub fn mask_identifier(input: &str) -> String {
    mask_identifier_with_options(input, &MaskOptions::default())
}

/// Masks an identifier with custom options, or returns [`INVALID`].
#[must_use]
pub fn mask_identifier_with_options(input: &str, options: &MaskOptions) -> String {
    try_mask_identifier_with_options(input, options).unwrap_or_else(|_| INVALID.to_string())
}

/// Masks a loosely typed value. Anything other than [`Value::String`] is [`INVALID`].
///
/// # Examples
///
/// ```rust
/// use desi_text::{mask_value, Value, INVALID};
///
/// assert_eq!(mask_value(&Value::from("123456781234")), "XXXX-XXXX-1234");
/// assert_eq!(mask_value(&Value::from(123456781234_i64)), INVALID);
/// ```
#[must_use]
pub fn mask_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => mask_identifier(s),
        None => {
            tracing::debug!(found = value.type_name(), "identifier is not a string");
            INVALID.to_string()
        }
    }
}

/// Masks an identifier with the default options, reporting why it was rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidIdentifier`] unless the trimmed input is exactly 12 ASCII digits.
pub fn try_mask_identifier(input: &str) -> Result<String> {
    try_mask_identifier_with_options(input, &MaskOptions::default())
}

/// Masks an identifier with custom options, reporting why it was rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidIdentifier`] unless the trimmed input is exactly
/// `options.length` ASCII digits.
pub fn try_mask_identifier_with_options(input: &str, options: &MaskOptions) -> Result<String> {
    let digits = input.trim();
    if digits.len() != options.length || !digits.bytes().all(|b| b.is_ascii_digit()) {
        let found_len = digits.chars().count();
        tracing::debug!(
            expected = options.length,
            found_len,
            "rejected malformed identifier"
        );
        return Err(Error::invalid_identifier(options.length, found_len));
    }

    let hidden = options.length.saturating_sub(options.visible);
    let mut masked = String::with_capacity(options.length * 2);
    for (i, digit) in digits.chars().enumerate() {
        if let Some(separator) = options.separator {
            if options.group_size > 0 && i > 0 && i % options.group_size == 0 {
                masked.push(separator);
            }
        }
        masked.push(if i < hidden { options.mask_char } else { digit });
    }

    tracing::trace!(len = masked.len(), "masked identifier");
    Ok(masked)
}
