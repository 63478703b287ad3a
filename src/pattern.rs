//! Regular expression generation for a single word.
//!
//! A [`PatternBuilder`] turns a word into an expression that also matches the disguised forms of
//! that word found in chat: letter variants from a [`VariantTable`], repeated letters, color codes
//! and punctuation or whitespace pushed between the letters. How the surrounding text is treated
//! depends on the [`Mode`].
//!
//! Words are split into extended grapheme clusters, so a letter followed by combining marks is
//! treated as one letter.

use crate::VariantTable;
use unicode_segmentation::UnicodeSegmentation;

/// Replacement tag appended to every pattern by default.
pub const DEFAULT_SUFFIX: &str = ",§cx";

/// Case-insensitivity flag leading every expression.
pub const CASE_INSENSITIVE: &str = "(?i)";
/// Any run of legacy (`§c`) or hexadecimal (`§x§f§f§0§0§0§0`) color codes.
pub const COLOR: &str = "(?:§[0-9a-fk-orx])*";
/// Any run of whitespace, punctuation or color codes used to split letters apart.
pub const SEPARATOR: &str = r#"(?:[\s._@":;()¿?=!&/\^*\-<>%,+]|§[0-9a-fk-orx])*"#;
/// Characters that continue a word: letters of any script and combining marks.
const LETTERS: &str = r"\p{L}\p{M}";
/// Characters a normal match may not touch on either side.
const BOUNDARY: &str = r"\p{L}\p{M}0-9§";
/// Skips any text, line breaks included.
const ANYTHING: &str = r"[\s\S]*?";

/// How strictly a generated expression treats the text around a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Matches the word only as a standalone token.
    ///
    /// The expression neither starts nor ends next to a letter, digit or color marker, so the
    /// word is not found inside longer innocent words.
    Normal,
    /// Matches the word wherever it starts, including inside a longer token.
    ///
    /// Only continuing with further letters after the word prevents a match.
    Strong,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Normal
    }
}

/// Generates filter expressions from words.
#[derive(Clone, Debug)]
pub struct PatternBuilder<'a> {
    table: &'a VariantTable,
    suffix: String,
}

impl<'a> PatternBuilder<'a> {
    /// Creates a builder using `table` and the [`DEFAULT_SUFFIX`].
    #[must_use]
    pub fn new(table: &'a VariantTable) -> Self {
        Self {
            table,
            suffix: DEFAULT_SUFFIX.to_owned(),
        }
    }

    /// Sets the literal text appended to every pattern.
    pub fn suffix<S>(&mut self, suffix: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.suffix = suffix.to_string();
        self
    }

    /// Returns the suffix appended to every pattern.
    #[inline]
    #[must_use]
    pub fn suffix_str(&self) -> &str {
        &self.suffix
    }

    /// Returns the bare expression for `word` in the given `mode`.
    ///
    /// The word is lower-cased first. An empty word yields an empty string.
    #[must_use]
    pub fn regex(&self, word: &str, mode: Mode) -> String {
        let word = word.to_lowercase();
        let classes = word
            .graphemes(true)
            .map(|grapheme| self.table.class(grapheme))
            .collect::<Vec<_>>();
        if classes.is_empty() {
            return String::new();
        }

        match mode {
            Mode::Normal => normal(&classes),
            Mode::Strong => strong(&classes),
        }
    }

    /// Returns the expression for `word` followed by the suffix.
    ///
    /// This is the text written into the filter document. An empty word yields an empty string,
    /// without the suffix.
    #[must_use]
    pub fn pattern(&self, word: &str, mode: Mode) -> String {
        let mut pattern = self.regex(word, mode);
        if !pattern.is_empty() {
            pattern.push_str(&self.suffix);
        }
        pattern
    }
}

/// Joins the letter classes, each repeatable, with separator runs in between.
fn body(classes: &[String]) -> String {
    classes
        .iter()
        .map(|class| format!("{}+", class))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn normal(classes: &[String]) -> String {
    let mut result = format!("{}(?<![{}])", CASE_INSENSITIVE, BOUNDARY);
    // Fails fast when the first and last letters never occur in order.
    if let [first, .., last] = classes {
        result.push_str(&format!("(?={}{}{}{})", ANYTHING, first, ANYTHING, last));
    }
    result.push_str(COLOR);
    result.push_str(&body(classes));
    result.push_str(COLOR);
    result.push_str(&format!("(?![{}])", BOUNDARY));
    result
}

fn strong(classes: &[String]) -> String {
    format!(
        "{}(?:{}{})(?![{}])",
        CASE_INSENSITIVE,
        COLOR,
        body(classes),
        LETTERS
    )
}
