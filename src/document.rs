//! Serialization of generated entries into the filter document consumed by chat plugins.
//!
//! The document is line oriented: a header line, a blank line, then for every entry an optional
//! `# <title>` comment line followed by the pattern line. Lines are kept typed in an
//! [`OutputDocument`] so a front end can tell comments from patterns when displaying them.

use crate::GeneratedEntry;
use core::fmt;
use serde::Deserialize;

/// Header line of every document.
pub const DEFAULT_HEADER: &str = "filters:";

/// How a pattern line is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStyle {
    /// `- <pattern>`
    ListItem,
    /// `'<pattern>'`, with every `'` inside the pattern doubled.
    Quoted,
}

impl Default for QuoteStyle {
    fn default() -> Self {
        QuoteStyle::ListItem
    }
}

/// Formatting knobs of the entry lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    /// Number of spaces before every title and pattern line.
    pub indent: usize,
    pub quote_style: QuoteStyle,
}

/// Kind of a document line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Blank,
    Title,
    Pattern,
}

/// A rendered document line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    /// Returns whether the line is a comment in the document format.
    #[inline]
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.kind == LineKind::Title
    }
}

/// Ordered lines of a filter document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputDocument {
    lines: Vec<Line>,
}

impl OutputDocument {
    /// Lays out `entries` under `header`.
    ///
    /// A title line is written for an entry if and only if `show_titles` is set and the entry has
    /// a title. Pattern text is copied as is, apart from the escaping of
    /// [`QuoteStyle::Quoted`].
    #[must_use]
    pub fn new(header: &str, entries: &[GeneratedEntry], show_titles: bool, layout: Layout) -> Self {
        let indent = " ".repeat(layout.indent);
        let mut lines = Vec::with_capacity(2 + entries.len() * 2);
        lines.push(Line {
            kind: LineKind::Header,
            text: header.to_owned(),
        });
        lines.push(Line {
            kind: LineKind::Blank,
            text: String::new(),
        });

        for entry in entries {
            if let (true, Some(title)) = (show_titles, &entry.title) {
                lines.push(Line {
                    kind: LineKind::Title,
                    text: format!("{}# {}", indent, title),
                });
            }
            lines.push(Line {
                kind: LineKind::Pattern,
                text: match layout.quote_style {
                    QuoteStyle::ListItem => format!("{}- {}", indent, entry.pattern),
                    QuoteStyle::Quoted => {
                        format!("{}'{}'", indent, entry.pattern.replace('\'', "''"))
                    }
                },
            });
        }

        Self { lines }
    }

    /// Returns the lines in order.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the number of pattern lines.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.kind == LineKind::Pattern)
            .count()
    }

    /// Returns whether the document holds no patterns.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern_count() == 0
    }
}

impl fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// Renders `entries` under `header` into document text.
#[must_use]
pub fn render(header: &str, entries: &[GeneratedEntry], show_titles: bool, layout: Layout) -> String {
    OutputDocument::new(header, entries, show_titles, layout).to_string()
}
