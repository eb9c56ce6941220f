//! # desi_text
//!
//! Small, independent text utilities for everyday Indian-app data:
//!
//! - **Identifier masking**: `123456781234` becomes `XXXX-XXXX-1234`
//! - **Title normalization**: `"  dil KA kya   kare "` becomes `"Dil ka Kya Kare"`
//! - **Chat line parsing**: an exported chat line becomes a [`LogRecord`] with a [`Sentiment`]
//! - **Form validation**: a loosely typed form record becomes a [`ValidationResult`]
//!
//! Every function is pure and stateless. None of them panic on bad input.
//!
//! ## Sentinels and `try_` variants
//!
//! Each utility comes as a sentinel function that always returns *something*
//! (`"INVALID"`, `""`, `None`), plus a `try_` variant that reports the reason as an
//! [`Error`]:
//!
//! ```rust
//! use desi_text::{mask_identifier, try_mask_identifier, Error, INVALID};
//!
//! assert_eq!(mask_identifier("9876"), INVALID);
//! assert!(matches!(
//!     try_mask_identifier("9876"),
//!     Err(Error::InvalidIdentifier { found_len: 4, .. })
//! ));
//! ```
//!
//! ## Loosely typed input
//!
//! Form records (and "maybe a string" inputs) are modelled with [`Value`], which
//! deserializes from any serde format and can be written inline with [`record!`]:
//!
//! ```rust
//! use desi_text::{record, validate_form, Field};
//!
//! let form = record!({
//!     "name": "Rahul Sharma",
//!     "email": "rahul@gmail.com",
//!     "phone": "9876543210",
//!     "age": 20,
//!     "pincode": "400001",
//!     "state": "Maharashtra",
//!     "agreeTerms": true
//! });
//! assert!(validate_form(&form).unwrap().is_valid());
//!
//! let form: desi_text::Value = serde_json::from_str(r#"{"name": "R"}"#).unwrap();
//! let result = validate_form(&form).unwrap();
//! assert_eq!(result.message(Field::Name), Some("Name must be 2-50 characters"));
//! ```
//!
//! ## Logging
//!
//! Rejections are logged through [`tracing`] at `debug` level, successes at
//! `trace`. Log events carry lengths and field names, never raw identifiers.
//! The library never installs a subscriber.

pub mod error;
pub mod form;
pub mod line;
pub mod macros;
pub mod map;
pub mod mask;
pub mod options;
pub mod title;
pub mod value;

pub use error::{Error, Result};
pub use form::{try_validate_form, validate_form, validate_record, Field, ValidationResult};
pub use line::{
    parse_log_line, parse_log_line_value, try_parse_log_line, try_parse_log_line_value, LogRecord,
    Sentiment,
};
pub use map::FieldMap;
pub use mask::{
    mask_identifier, mask_identifier_with_options, mask_value, try_mask_identifier,
    try_mask_identifier_with_options, INVALID,
};
pub use options::{MaskOptions, TitleOptions, DEFAULT_STOP_WORDS};
pub use title::{
    normalize_title, normalize_title_value, normalize_title_with_options, try_normalize_title,
    try_normalize_title_with_options,
};
pub use value::{Number, Value};
