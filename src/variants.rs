//! Letter variants accepted in place of a base letter.
//!
//! A [`VariantTable`] maps a lower-case base character to every character a chat user might type
//! instead of it: accented forms, look-alike digits and symbols. The table is an ordinary value
//! constructed once and handed to a [`PatternBuilder`], so alternate tables can be used side by
//! side.
//!
//! [`PatternBuilder`]: crate::PatternBuilder

use hashbrown::HashMap;

/// The rows of the default table.
///
/// Every row lists its base character first.
const DEFAULT_ROWS: [(char, &str); 26] = [
    ('a', "aáÁäÄ"),
    ('b', "bv"),
    ('c', "ckçÇ"),
    ('d', "d"),
    ('e', "eéÉëË3"),
    ('f', "f"),
    ('g', "g9"),
    ('h', "h"),
    ('i', "i1!íl|"),
    ('j', "jJ"),
    ('k', "kK"),
    ('l', "l|!"),
    ('m', "m"),
    ('n', "nñÑ"),
    ('o', "o0óÓ"),
    ('p', "p"),
    ('q', "q"),
    ('r', "r"),
    ('s', "s$5"),
    ('t', "t7"),
    ('u', "uú"),
    ('v', "vb"),
    ('w', "w"),
    ('x', "x×"),
    ('y', "y"),
    ('z', "z2"),
];

/// Pushes `c` onto `buffer`, escaped so a regex engine reads it literally.
fn push_escaped(buffer: &mut String, c: char) {
    buffer.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
}

/// Mapping from a base character to the characters accepted in its place.
///
/// Invariant: every stored set of alternatives contains its base character, and no alternative
/// appears twice within a set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantTable {
    rows: HashMap<char, String>,
}

impl VariantTable {
    /// Creates a table with no rows.
    ///
    /// Every character then falls back to a literal match.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Sets the alternatives for `base`, replacing any existing row.
    ///
    /// `base` is always made part of its own alternatives, ahead of the given ones if it was
    /// missing. Repeated alternatives are dropped, keeping the first occurrence.
    pub fn insert<S>(&mut self, base: char, alternatives: &S) -> &mut Self
    where
        S: AsRef<str> + ?Sized,
    {
        let mut row = String::with_capacity(alternatives.as_ref().len() + base.len_utf8());
        for c in core::iter::once(base).chain(alternatives.as_ref().chars()) {
            if !row.contains(c) {
                row.push(c);
            }
        }
        self.rows.insert(base, row);
        self
    }

    /// Inserts every `(base, alternatives)` pair, in order.
    pub fn extend<I, S>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        for (base, alternatives) in rows {
            self.insert(base, &alternatives);
        }
        self
    }

    /// Returns the stored alternatives of `c`, if `c` has a row.
    #[inline]
    #[must_use]
    pub fn get(&self, c: char) -> Option<&str> {
        self.rows.get(&c).map(String::as_str)
    }

    /// Returns the characters accepted in place of `c`, always including `c` itself.
    ///
    /// Characters without a row map to themselves alone.
    #[must_use]
    pub fn lookup(&self, c: char) -> String {
        match self.get(c) {
            Some(alternatives) => alternatives.to_owned(),
            None => c.to_string(),
        }
    }

    /// Renders the regex fragment matching a single occurrence of `grapheme`.
    ///
    /// A single character becomes a bracket class of its escaped alternatives. A grapheme made
    /// of several code points (a letter followed by combining marks) is matched as an escaped
    /// literal sequence inside a non-capturing group.
    #[must_use]
    pub fn class(&self, grapheme: &str) -> String {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                let alternatives = self.lookup(c);
                let mut class = String::with_capacity(alternatives.len() * 2 + 2);
                class.push('[');
                for alternative in alternatives.chars() {
                    push_escaped(&mut class, alternative);
                }
                class.push(']');
                class
            }
            _ => format!("(?:{})", regex::escape(grapheme)),
        }
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table has no rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for VariantTable {
    /// The table shipped with the tool: one row for every ASCII letter.
    fn default() -> Self {
        let mut table = Self::empty();
        table.extend(DEFAULT_ROWS.iter().copied());
        table
    }
}
