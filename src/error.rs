//! Error types for the typed (`try_*`) entry points.
//!
//! The sentinel functions ([`mask_identifier`](crate::mask_identifier),
//! [`normalize_title`](crate::normalize_title), [`parse_log_line`](crate::parse_log_line),
//! [`validate_form`](crate::validate_form)) never return these. They exist for
//! callers that want to know *why* an input was rejected.
//!
//! ## Examples
//!
//! ```rust
//! use desi_text::{try_mask_identifier, Error};
//!
//! let err = try_mask_identifier("9876").unwrap_err();
//! assert_eq!(err, Error::invalid_identifier(12, 4));
//! assert!(err.to_string().contains("12 ASCII digits"));
//! ```

use thiserror::Error;

/// Every reason an input can be rejected.
///
/// Variants never carry the raw identifier digits, so errors are safe to log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Identifier was not exactly `expected` ASCII digits after trimming.
    #[error("identifier must be exactly {expected} ASCII digits, found {found_len} characters")]
    InvalidIdentifier { expected: usize, found_len: usize },

    /// Title held nothing but whitespace.
    #[error("title is empty after collapsing whitespace")]
    EmptyTitle,

    /// A delimiter required by the log line format is absent.
    #[error("log line is missing the {delimiter:?} delimiter")]
    MissingDelimiter { delimiter: &'static str },

    /// Input was expected to be a string or object and was not.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Sentiment label outside `funny`, `love`, `neutral`.
    #[error("unknown sentiment {0:?}")]
    UnknownSentiment(String),

    /// Form field name that is not one of the seven known fields.
    #[error("unknown form field {0:?}")]
    UnknownField(String),
}

impl Error {
    /// Creates an identifier error. Only the length of the offending input is kept.
    pub fn invalid_identifier(expected: usize, found_len: usize) -> Self {
        Error::InvalidIdentifier {
            expected,
            found_len,
        }
    }

    /// Creates a missing-delimiter error for log line parsing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desi_text::Error;
    ///
    /// let err = Error::missing_delimiter(": ");
    /// assert!(err.to_string().contains("\": \""));
    /// ```
    pub fn missing_delimiter(delimiter: &'static str) -> Self {
        Error::MissingDelimiter { delimiter }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }

    pub fn unknown_sentiment(label: &str) -> Self {
        Error::UnknownSentiment(label.to_string())
    }

    pub fn unknown_field(name: &str) -> Self {
        Error::UnknownField(name.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_error_hides_digits() {
        let err = Error::invalid_identifier(12, 5);
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("found 5 characters"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::type_mismatch("object", "array");
        assert_eq!(err.to_string(), "expected object, found array");
    }
}
