//! Title normalization.
//!
//! Collapses whitespace and applies Title Case to every word, except the
//! stop words of [`TitleOptions`] which are written lowercase.
//!
//! ```rust
//! use desi_text::normalize_title;
//!
//! assert_eq!(
//!     normalize_title("  DILWALE   DULHANIA   LE   JAYENGE  "),
//!     "Dilwale Dulhania Le Jayenge"
//! );
//! assert_eq!(normalize_title("dil ka kya kare"), "Dil ka Kya Kare");
//! assert_eq!(normalize_title("the GREAT gambler"), "The Great Gambler");
//! ```
//!
//! A stop word in first position stays lowercase, with one exception: a title
//! opening with `the` gets `The`. `"ka ghar"` normalizes to `"ka Ghar"`.

use crate::{Error, Result, TitleOptions, Value};

/// The only stop word that is capitalized when it opens a title.
const LEADING_ARTICLE: &str = "the";

/// Normalizes a title with the default stop words. Blank input yields `""`.
#[must_use]
pub fn normalize_title(input: &str) -> String {
    normalize_title_with_options(input, &TitleOptions::default())
}

/// Normalizes a title with custom stop words. Blank input yields `""`.
#[must_use]
pub fn normalize_title_with_options(input: &str, options: &TitleOptions) -> String {
    try_normalize_title_with_options(input, options).unwrap_or_default()
}

/// Normalizes a loosely typed value. Anything other than [`Value::String`] yields `""`.
#[must_use]
pub fn normalize_title_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => normalize_title(s),
        None => {
            tracing::debug!(found = value.type_name(), "title is not a string");
            String::new()
        }
    }
}

/// Normalizes a title with the default stop words.
///
/// # Errors
///
/// Returns [`Error::EmptyTitle`] when the input is empty or whitespace only.
pub fn try_normalize_title(input: &str) -> Result<String> {
    try_normalize_title_with_options(input, &TitleOptions::default())
}

/// Normalizes a title with custom stop words.
///
/// # Errors
///
/// Returns [`Error::EmptyTitle`] when the input is empty or whitespace only.
pub fn try_normalize_title_with_options(input: &str, options: &TitleOptions) -> Result<String> {
    let mut words: Vec<String> = input
        .split_whitespace()
        .map(|word| {
            // Looked up on the title-cased form so a second pass sees the same word.
            let titled = title_case(word);
            let lower = titled.to_lowercase();
            if options.is_stop_word(&lower) {
                lower
            } else {
                titled
            }
        })
        .collect();

    match words.first_mut() {
        None => {
            tracing::debug!(len = input.len(), "rejected blank title");
            return Err(Error::EmptyTitle);
        }
        Some(first) if first.as_str() == LEADING_ARTICLE => {
            *first = title_case(LEADING_ARTICLE);
        }
        Some(_) => {}
    }

    Ok(words.join(" "))
}

/// First character uppercase, the rest lowercase.
///
/// A first character whose uppercase form is several characters (`ß` is `SS`)
/// is kept as written, otherwise a second pass would lowercase part of it.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    let mut titled = String::with_capacity(word.len());
    titled.push(head);
    titled.push_str(&chars.as_str().to_lowercase());
    titled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_title("  sholay  "), "Sholay");
        assert_eq!(normalize_title("mughal\t\te\n azam"), "Mughal E Azam");
    }

    #[test]
    fn test_stop_words_lowercase() {
        assert_eq!(
            normalize_title("KABHI KHUSHI KABHIE GHAM"),
            "Kabhi Khushi Kabhie Gham"
        );
        assert_eq!(normalize_title("GANGS OF WASSEYPUR"), "Gangs of Wasseypur");
        assert_eq!(
            normalize_title("Zindagi Na Milegi DOBARA"),
            "Zindagi Na Milegi Dobara"
        );
        assert_eq!(normalize_title("jab WE met AUR tum"), "Jab We Met aur Tum");
    }

    #[test]
    fn test_leading_the_is_capitalized() {
        assert_eq!(normalize_title("the lunchbox"), "The Lunchbox");
        assert_eq!(normalize_title("THE LUNCHBOX"), "The Lunchbox");
        assert_eq!(
            normalize_title("the legend of bhagat singh"),
            "The Legend of Bhagat Singh"
        );
    }

    #[test]
    fn test_other_leading_stop_words_stay_lowercase() {
        assert_eq!(normalize_title("ka ghar"), "ka Ghar");
        assert_eq!(normalize_title("A WEDNESDAY"), "a Wednesday");
        assert_eq!(normalize_title("in the mood"), "in the Mood");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("   \t\n "), "");
        assert_eq!(try_normalize_title("  "), Err(Error::EmptyTitle));
    }

    #[test]
    fn test_non_string_values() {
        assert_eq!(normalize_title_value(&Value::from(42)), "");
        assert_eq!(normalize_title_value(&Value::Null), "");
        assert_eq!(normalize_title_value(&Value::from("lagaan")), "Lagaan");
    }

    #[test]
    fn test_custom_stop_words() {
        let options = TitleOptions::without_stop_words();
        assert_eq!(
            normalize_title_with_options("dil ka kya kare", &options),
            "Dil Ka Kya Kare"
        );
    }

    #[test]
    fn test_title_case_word() {
        assert_eq!(title_case("hELLO"), "Hello");
        assert_eq!(title_case("3idiots"), "3idiots");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("ßIG"), "ßig");
        assert_eq!(title_case("éCOLE"), "École");
    }

    #[test]
    fn test_multi_char_uppercase_is_stable() {
        let once = normalize_title("ßig film");
        assert_eq!(once, "ßig Film");
        assert_eq!(normalize_title(&once), once);
    }
}
