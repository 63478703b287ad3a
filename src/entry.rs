//! Word list parsing and batch generation.
//!
//! Each usable line of a word list becomes a [`WordEntry`]. An [`EntryProcessor`] optionally
//! expands the entries with their alternate grammatical gender, drops duplicates, and maps every
//! remaining entry through a [`PatternBuilder`] into a [`GeneratedEntry`], keeping the order the
//! words were written in.

use crate::{Mode, PatternBuilder};
use bitflags::bitflags;
use core::fmt;
use hashbrown::HashSet;
use tracing::debug;

/// Prefix marking a strong word.
pub const STRONG_MARKER: char = '!';
/// Prefix marking a comment line.
pub const COMMENT_MARKER: char = '#';

bitflags! {
    /// Options deciding which entries are generated and how they are labeled.
    pub struct Options: u8 {
        /// Add the alternate-gender form of every word ending in the gender suffix.
        const GENDER_VARIANTS = 0b0000_0001;
        /// Label every generated pattern with the word it was generated from.
        const TITLES = 0b0000_0010;
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::TITLES
    }
}

/// A single word taken from the word list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordEntry {
    /// The word as written, without the strong marker.
    pub text: String,
    /// Whether the word was prefixed with the [`STRONG_MARKER`].
    pub strong: bool,
}

impl WordEntry {
    /// Parses one line of a word list.
    ///
    /// Returns `None` for blank lines and comments. A lone marker yields an entry with empty text,
    /// which generates nothing.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return None;
        }
        Some(match line.strip_prefix(STRONG_MARKER) {
            Some(text) => Self {
                text: text.to_owned(),
                strong: true,
            },
            None => Self {
                text: line.to_owned(),
                strong: false,
            },
        })
    }

    /// Returns the mode this entry's pattern is generated in.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.strong {
            Mode::Strong
        } else {
            Mode::Normal
        }
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.strong {
            write!(f, "{}{}", STRONG_MARKER, self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// Parses every usable line of `text`.
pub fn parse_lines(text: &str) -> Vec<WordEntry> {
    text.lines().filter_map(WordEntry::parse).collect()
}

/// Trailing suffix swap producing the alternate grammatical gender of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenderRule {
    from: String,
    to: String,
}

impl GenderRule {
    /// Creates a rule replacing a trailing `from` with `to`.
    pub fn new<S, T>(from: &S, to: &T) -> Self
    where
        S: ToString + ?Sized,
        T: ToString + ?Sized,
    {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Returns `text` with its trailing suffix swapped, or `None` if `text` does not end with it.
    ///
    /// The suffix is compared case-insensitively. A suffix written entirely in upper case is
    /// replaced in upper case.
    #[must_use]
    pub fn apply(&self, text: &str) -> Option<String> {
        let len = self.from.chars().count();
        if len == 0 {
            return None;
        }
        let (split, _) = text.char_indices().rev().nth(len - 1)?;
        let (stem, tail) = text.split_at(split);
        if tail.to_lowercase() != self.from.to_lowercase() {
            return None;
        }

        let upper = tail.chars().any(char::is_uppercase) && !tail.chars().any(char::is_lowercase);
        Some(if upper {
            format!("{}{}", stem, self.to.to_uppercase())
        } else {
            format!("{}{}", stem, self.to)
        })
    }
}

impl Default for GenderRule {
    /// Spanish masculine to feminine: `puto` gains `puta`.
    fn default() -> Self {
        Self::new("o", "a")
    }
}

/// A pattern generated from one [`WordEntry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedEntry {
    /// The word the pattern was generated from, present if titles were requested.
    pub title: Option<String>,
    /// The expression followed by the suffix.
    pub pattern: String,
}

/// Maps word entries to generated patterns.
#[derive(Clone, Debug)]
pub struct EntryProcessor<'a> {
    builder: PatternBuilder<'a>,
    gender_rule: GenderRule,
}

impl<'a> EntryProcessor<'a> {
    /// Creates a processor generating through `builder`.
    #[must_use]
    pub fn new(builder: PatternBuilder<'a>, gender_rule: GenderRule) -> Self {
        Self {
            builder,
            gender_rule,
        }
    }

    /// Applies gender expansion (when enabled in `options`) and removes duplicate entries.
    ///
    /// First-seen order is kept. A derived entry directly follows the entry it was derived from
    /// and keeps its strong marker.
    pub fn expand<I>(&self, entries: I, options: Options) -> Vec<WordEntry>
    where
        I: IntoIterator<Item = WordEntry>,
    {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for entry in entries {
            let derived = if options.contains(Options::GENDER_VARIANTS) {
                self.gender_rule.apply(&entry.text).map(|text| WordEntry {
                    text,
                    strong: entry.strong,
                })
            } else {
                None
            };
            for entry in core::iter::once(entry).chain(derived) {
                if seen.insert(entry.clone()) {
                    result.push(entry);
                }
            }
        }
        result
    }

    /// Generates one entry per usable line of `lines`.
    ///
    /// Entries whose word is empty once the marker is stripped are left out.
    pub fn process<I, S>(&self, lines: I, options: Options) -> Vec<GeneratedEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .filter_map(|line| WordEntry::parse(line.as_ref()));
        self.generate(entries, options)
    }

    /// Generates one entry per word entry, in order.
    pub fn generate<I>(&self, entries: I, options: Options) -> Vec<GeneratedEntry>
    where
        I: IntoIterator<Item = WordEntry>,
    {
        self.expand(entries, options)
            .into_iter()
            .filter_map(|entry| {
                let pattern = self.builder.pattern(&entry.text, entry.mode());
                if pattern.is_empty() {
                    debug!(entry = %entry, "skipping empty word");
                    return None;
                }
                debug!(entry = %entry, mode = ?entry.mode(), "generated pattern");
                Some(GeneratedEntry {
                    title: if options.contains(Options::TITLES) {
                        Some(entry.text)
                    } else {
                        None
                    },
                    pattern,
                })
            })
            .collect()
    }
}
