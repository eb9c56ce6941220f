//! Chat export line parsing.
//!
//! Parses one line of an exported chat in the shape
//! `"<date>, <time> - <sender>: <message>"` into a [`LogRecord`], counting the
//! message words and classifying its [`Sentiment`].
//!
//! ```rust
//! use desi_text::{parse_log_line, Sentiment};
//!
//! let record = parse_log_line("25/01/2025, 14:30 - Rahul: Bhai party kab hai? 😂").unwrap();
//! assert_eq!(record.date, "25/01/2025");
//! assert_eq!(record.time, "14:30");
//! assert_eq!(record.sender, "Rahul");
//! assert_eq!(record.text, "Bhai party kab hai? 😂");
//! assert_eq!(record.word_count, 5);
//! assert_eq!(record.sentiment, Sentiment::Funny);
//! ```
//!
//! ## Positional extraction
//!
//! Fields are cut at the *first* occurrence of each delimiter. A line is
//! rejected only when `" - "` or `": "` is missing altogether; their relative
//! order is not checked. So a line such as `"Re: 01/01/2024, 08:00 - Neha: hi"`
//! is accepted and cut at the early `": "`. The sender comes out empty and the
//! message is everything after `"Re: "`. A line without `", "` has an empty date
//! and its time runs from the start of the line.

use crate::{Error, Result, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DATE_DELIMITER: &str = ", ";
pub const SENDER_DELIMITER: &str = " - ";
pub const MESSAGE_DELIMITER: &str = ": ";

const FUNNY_MARKERS: [&str; 3] = ["😂", ":)", "haha"];
const LOVE_MARKERS: [&str; 3] = ["❤", "love", "pyaar"];

/// Mood of a chat message, decided by marker substrings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Funny,
    Love,
    Neutral,
}

impl Sentiment {
    /// Classifies message text, case-insensitively.
    ///
    /// Funny markers (`😂`, `:)`, `haha`) win over love markers (`❤`, `love`, `pyaar`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desi_text::Sentiment;
    ///
    /// assert_eq!(Sentiment::classify("HAHAHA"), Sentiment::Funny);
    /// assert_eq!(Sentiment::classify("Love you ❤ haha"), Sentiment::Funny);
    /// assert_eq!(Sentiment::classify("Bahut pyaar"), Sentiment::Love);
    /// assert_eq!(Sentiment::classify("kal milte hai"), Sentiment::Neutral);
    /// ```
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        if FUNNY_MARKERS.iter().any(|m| lower.contains(m)) {
            Sentiment::Funny
        } else if LOVE_MARKERS.iter().any(|m| lower.contains(m)) {
            Sentiment::Love
        } else {
            Sentiment::Neutral
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Sentiment::Funny => "funny",
            Sentiment::Love => "love",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "funny" => Ok(Sentiment::Funny),
            "love" => Ok(Sentiment::Love),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(Error::unknown_sentiment(other)),
        }
    }
}

/// One parsed chat line. Every field is always populated (possibly with an empty string).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub date: String,
    pub time: String,
    pub sender: String,
    pub text: String,
    /// Whitespace-separated tokens in `text`.
    pub word_count: usize,
    pub sentiment: Sentiment,
}

/// Parses a chat line, returning `None` when a required delimiter is missing.
#[must_use]
pub fn parse_log_line(line: &str) -> Option<LogRecord> {
    try_parse_log_line(line).ok()
}

/// Parses a loosely typed value. Anything other than [`Value::String`] yields `None`.
///
/// # Examples
///
/// ```rust
/// use desi_text::{parse_log_line_value, Value};
///
/// assert!(parse_log_line_value(&Value::from(42)).is_none());
/// ```
#[must_use]
pub fn parse_log_line_value(value: &Value) -> Option<LogRecord> {
    try_parse_log_line_value(value).ok()
}

/// Parses a loosely typed value, reporting why it was rejected.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] for anything other than [`Value::String`], and
/// [`Error::MissingDelimiter`] as for [`try_parse_log_line`].
pub fn try_parse_log_line_value(value: &Value) -> Result<LogRecord> {
    match value.as_str() {
        Some(line) => try_parse_log_line(line),
        None => {
            tracing::debug!(found = value.type_name(), "log line is not a string");
            Err(Error::type_mismatch("string", value.type_name()))
        }
    }
}

/// Parses a chat line.
///
/// # Errors
///
/// Returns [`Error::MissingDelimiter`] when the line contains no `" - "` or no `": "`.
pub fn try_parse_log_line(line: &str) -> Result<LogRecord> {
    let dash = find_delimiter(line, SENDER_DELIMITER)?;
    let colon = find_delimiter(line, MESSAGE_DELIMITER)?;
    let comma = line.find(DATE_DELIMITER);

    // Without ", " there is no date to cut; the date is left empty rather than
    // guessed from the rest of the line.
    let date = match comma {
        Some(end) => &line[..end],
        None => "",
    };
    let time_start = comma.map_or(0, |c| c + DATE_DELIMITER.len());
    let time = between(line, time_start, dash);
    let sender = between(line, dash + SENDER_DELIMITER.len(), colon);
    let text = line[colon + MESSAGE_DELIMITER.len()..].trim();

    let record = LogRecord {
        date: date.trim().to_string(),
        time: time.trim().to_string(),
        sender: sender.trim().to_string(),
        text: text.to_string(),
        word_count: text.split_whitespace().count(),
        sentiment: Sentiment::classify(text),
    };
    tracing::trace!(
        word_count = record.word_count,
        sentiment = %record.sentiment,
        "parsed log line"
    );
    Ok(record)
}

fn find_delimiter(line: &str, delimiter: &'static str) -> Result<usize> {
    line.find(delimiter).ok_or_else(|| {
        tracing::debug!(delimiter, len = line.len(), "rejected malformed log line");
        Error::missing_delimiter(delimiter)
    })
}

/// `line[start..end]`, or `""` when the delimiters appear out of order.
fn between(line: &str, start: usize, end: usize) -> &str {
    if start >= end {
        ""
    } else {
        &line[start..end]
    }
}
