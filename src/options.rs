//! Configuration options for masking and title normalization.
//!
//! - [`MaskOptions`]: identifier length, how much stays visible, mask and separator characters
//! - [`TitleOptions`]: the stop-word list kept lowercase inside titles
//!
//! The defaults reproduce the standard behaviour exactly; the plain functions
//! ([`mask_identifier`](crate::mask_identifier), [`normalize_title`](crate::normalize_title))
//! always use them.
//!
//! ## Examples
//!
//! ```rust
//! use desi_text::{mask_identifier_with_options, MaskOptions};
//!
//! let options = MaskOptions::new().with_mask_char('*').with_separator(Some(' '));
//! assert_eq!(
//!     mask_identifier_with_options("123456781234", &options),
//!     "**** **** 1234"
//! );
//! ```

use indexmap::IndexSet;

/// Words kept lowercase in titles unless they open the title.
pub const DEFAULT_STOP_WORDS: [&str; 11] = [
    "ka", "ki", "ke", "se", "aur", "ya", "the", "of", "in", "a", "an",
];

/// Configuration for identifier masking.
///
/// # Examples
///
/// ```rust
/// use desi_text::MaskOptions;
///
/// let options = MaskOptions::new();
/// assert_eq!(options.length, 12);
/// assert_eq!(options.visible, 4);
/// assert_eq!(options.separator, Some('-'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskOptions {
    /// Exact number of digits an identifier must have.
    pub length: usize,
    /// Trailing digits left unmasked.
    pub visible: usize,
    /// A separator goes between every `group_size` output characters. Zero disables grouping.
    pub group_size: usize,
    pub mask_char: char,
    pub separator: Option<char>,
}

impl Default for MaskOptions {
    fn default() -> Self {
        MaskOptions {
            length: 12,
            visible: 4,
            group_size: 4,
            mask_char: 'X',
            separator: Some('-'),
        }
    }
}

impl MaskOptions {
    /// Creates default options (12 digits, last 4 visible, `XXXX-XXXX-` prefix).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the required identifier length.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets how many trailing digits stay visible. Values above `length` show everything.
    #[must_use]
    pub fn with_visible(mut self, visible: usize) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Sets the group separator; `None` produces an ungrouped string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desi_text::{mask_identifier_with_options, MaskOptions};
    ///
    /// let options = MaskOptions::new().with_separator(None);
    /// assert_eq!(mask_identifier_with_options("123456781234", &options), "XXXXXXXX1234");
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: Option<char>) -> Self {
        self.separator = separator;
        self
    }
}

/// Configuration for title normalization.
///
/// Stop words are stored lowercase; lookups compare against the lowercased word.
///
/// # Examples
///
/// ```rust
/// use desi_text::{normalize_title_with_options, TitleOptions};
///
/// let options = TitleOptions::new().with_stop_word("KO");
/// assert!(options.is_stop_word("ko"));
/// assert_eq!(
///     normalize_title_with_options("dil ko kya kare", &options),
///     "Dil ko Kya Kare"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleOptions {
    pub stop_words: IndexSet<String>,
}

impl Default for TitleOptions {
    fn default() -> Self {
        TitleOptions {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl TitleOptions {
    /// Creates options with the default stop-word list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with no stop words at all; every word is title-cased.
    #[must_use]
    pub fn without_stop_words() -> Self {
        TitleOptions {
            stop_words: IndexSet::new(),
        }
    }

    /// Adds a stop word.
    #[must_use]
    pub fn with_stop_word(mut self, word: &str) -> Self {
        self.stop_words.insert(word.to_lowercase());
        self
    }

    /// `word` must already be lowercase.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}
