//! Configuration of a complete word list to document transformation.

use crate::{
    document::DEFAULT_HEADER, pattern::DEFAULT_SUFFIX, EntryProcessor, Error, GenderRule,
    GeneratedEntry, Layout, Options, OutputDocument, PatternBuilder, Result, VariantTable,
};
use tracing::warn;

/// A configurable builder for a [`Generator`].
///
/// # Example
/// ```
/// use filter_generator::{GeneratorBuilder, Options};
///
/// let generator = GeneratorBuilder::new()
///     .variant('a', "4@")
///     .options(Options::TITLES | Options::GENDER_VARIANTS)
///     .build();
///
/// let document = generator.document("puto").unwrap();
/// assert_eq!(document.pattern_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorBuilder {
    table: VariantTable,
    suffix: String,
    gender_rule: GenderRule,
    header: String,
    options: Options,
    layout: Layout,
}

impl GeneratorBuilder {
    /// Creates a builder with the default variant table, suffix, header and options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: VariantTable::default(),
            suffix: DEFAULT_SUFFIX.to_owned(),
            gender_rule: GenderRule::default(),
            header: DEFAULT_HEADER.to_owned(),
            options: Options::default(),
            layout: Layout::default(),
        }
    }

    /// Replaces the whole variant table.
    #[inline]
    pub fn table(&mut self, table: VariantTable) -> &mut Self {
        self.table = table;
        self
    }

    /// Sets the alternatives of a single base character.
    #[inline]
    pub fn variant<S>(&mut self, base: char, alternatives: &S) -> &mut Self
    where
        S: AsRef<str> + ?Sized,
    {
        self.table.insert(base, alternatives);
        self
    }

    #[inline]
    pub fn suffix<S>(&mut self, suffix: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.suffix = suffix.to_string();
        self
    }

    #[inline]
    pub fn header<S>(&mut self, header: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.header = header.to_string();
        self
    }

    #[inline]
    pub fn gender_rule(&mut self, gender_rule: GenderRule) -> &mut Self {
        self.gender_rule = gender_rule;
        self
    }

    #[inline]
    pub fn options(&mut self, options: Options) -> &mut Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn layout(&mut self, layout: Layout) -> &mut Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn build(&self) -> Generator {
        Generator {
            table: self.table.clone(),
            suffix: self.suffix.clone(),
            gender_rule: self.gender_rule.clone(),
            header: self.header.clone(),
            options: self.options,
            layout: self.layout,
        }
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns word list text into a filter document.
///
/// Holds no state between calls; every call recomputes the result from the given text, which
/// makes it suitable for refreshing a preview after every edit.
#[derive(Clone, Debug)]
pub struct Generator {
    table: VariantTable,
    suffix: String,
    gender_rule: GenderRule,
    header: String,
    options: Options,
    layout: Layout,
}

impl Generator {
    #[inline]
    #[must_use]
    pub fn table(&self) -> &VariantTable {
        &self.table
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns a pattern builder over this generator's table and suffix.
    #[must_use]
    pub fn pattern_builder(&self) -> PatternBuilder<'_> {
        let mut builder = PatternBuilder::new(&self.table);
        builder.suffix(&self.suffix);
        builder
    }

    /// Generates the entries for every usable line of `text`.
    #[must_use]
    pub fn entries(&self, text: &str) -> Vec<GeneratedEntry> {
        EntryProcessor::new(self.pattern_builder(), self.gender_rule.clone())
            .process(text.lines(), self.options)
    }

    /// Lays out the document for `text`, which may hold no patterns at all.
    #[must_use]
    pub fn preview(&self, text: &str) -> OutputDocument {
        OutputDocument::new(
            &self.header,
            &self.entries(text),
            self.options.contains(Options::TITLES),
            self.layout,
        )
    }

    /// Generates the document for `text`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if `text` yields no patterns.
    pub fn document(&self, text: &str) -> Result<OutputDocument> {
        let document = self.preview(text);
        if document.is_empty() {
            warn!("no words to process");
            return Err(Error::EmptyInput);
        }
        Ok(document)
    }
}

impl Default for Generator {
    fn default() -> Self {
        GeneratorBuilder::new().build()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error, GenderRule, Generator, GeneratorBuilder, Layout, Mode, Options, QuoteStyle,
        VariantTable,
    };

    #[test]
    fn empty_input() {
        let generator = Generator::default();

        assert!(matches!(generator.document(""), Err(Error::EmptyInput)));
        assert!(matches!(
            generator.document("# only\n# comments\n   \n"),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(generator.document("!\n!"), Err(Error::EmptyInput)));
        assert_eq!(generator.preview("# only").to_string(), "filters:\n\n");
    }

    #[test]
    fn recompute_is_identical() {
        let generator = Generator::default();
        let text = "Passive\n!Hard\nsex\n!bitch";

        assert_eq!(
            generator.document(text).unwrap().to_string(),
            generator.document(text).unwrap().to_string()
        );
    }

    #[test]
    fn custom_variant() {
        let generator = GeneratorBuilder::new().variant('a', "4@").build();

        assert_eq!(generator.table().lookup('a'), "a4@");
        assert!(generator.entries("a")[0].pattern.contains("[a4@]+"));
    }

    #[test]
    fn custom_table_and_suffix() {
        let generator = GeneratorBuilder::new()
            .table(VariantTable::empty())
            .suffix(", ***")
            .build();

        let entries = generator.entries("sex");

        assert_eq!(
            entries[0].pattern,
            generator.pattern_builder().pattern("sex", Mode::Normal)
        );
        assert!(entries[0].pattern.contains("[s]+"));
        assert!(entries[0].pattern.ends_with(", ***"));
    }

    #[test]
    fn header_and_layout() {
        let generator = GeneratorBuilder::new()
            .header("words:")
            .options(Options::empty())
            .layout(Layout {
                indent: 4,
                quote_style: QuoteStyle::Quoted,
            })
            .build();

        let text = generator.document("x").unwrap().to_string();

        assert!(text.starts_with("words:\n\n    '(?i)"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn custom_gender_rule() {
        let generator = GeneratorBuilder::new()
            .gender_rule(GenderRule::new("e", "a"))
            .options(Options::all())
            .build();

        let titles = generator
            .entries("!pene")
            .into_iter()
            .map(|entry| entry.title.unwrap())
            .collect::<Vec<_>>();

        assert_eq!(titles, vec!["pene", "pena"]);
    }
}
