//! Settings file of the generator.
//!
//! Settings are read from a TOML file. Every key is optional and falls back to the tool's
//! defaults:
//!
//! ```toml
//! words_file = "words.txt"
//! output_file = "FilteredWords.yml"
//! header = "filters:"
//! suffix = ",§cx"
//! gender_variants = false
//! titles = true
//! quote_style = "list-item"   # or "quoted"
//! indent = 0
//!
//! [gender]
//! from = "o"
//! to = "a"
//!
//! [variants]
//! a = "aáÁäÄ4@"
//! ```

use crate::{
    document::DEFAULT_HEADER, pattern::DEFAULT_SUFFIX, Error, GenderRule, GeneratorBuilder,
    Layout, Options, QuoteStyle, Result,
};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Default location of the settings file.
pub const DEFAULT_CONFIG_FILE: &str = "filter-generator.toml";
pub const DEFAULT_WORDS_FILE: &str = "words.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "FilteredWords.yml";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenderConfig {
    pub from: String,
    pub to: String,
}

impl Default for GenderConfig {
    fn default() -> Self {
        Self {
            from: "o".to_owned(),
            to: "a".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Word list read by the generator.
    pub words_file: PathBuf,
    /// Document written by the generator.
    pub output_file: PathBuf,
    pub header: String,
    /// Literal text appended to every pattern.
    pub suffix: String,
    pub gender_variants: bool,
    pub titles: bool,
    pub quote_style: QuoteStyle,
    pub indent: usize,
    pub gender: GenderConfig,
    /// Rows added to, or replacing rows of, the default variant table.
    pub variants: BTreeMap<char, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_file: PathBuf::from(DEFAULT_WORDS_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            header: DEFAULT_HEADER.to_owned(),
            suffix: DEFAULT_SUFFIX.to_owned(),
            gender_variants: false,
            titles: true,
            quote_style: QuoteStyle::default(),
            indent: 0,
            gender: GenderConfig::default(),
            variants: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Parses settings from TOML text.
    ///
    /// `path` is only used to describe errors.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })
    }

    /// Reads settings from `path`.
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not valid settings.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        info!(path = %path.display(), "loaded settings");
        Ok(config)
    }

    /// Reads settings from `path`, using the defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_toml(&text, path)?;
                info!(path = %path.display(), "loaded settings");
                Ok(config)
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(Error::Read {
                path: path.to_owned(),
                source,
            }),
        }
    }

    /// Returns the options selected by these settings.
    #[must_use]
    pub fn options(&self) -> Options {
        let mut options = Options::empty();
        options.set(Options::GENDER_VARIANTS, self.gender_variants);
        options.set(Options::TITLES, self.titles);
        options
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout {
            indent: self.indent,
            quote_style: self.quote_style,
        }
    }

    /// Returns a generator builder set up with these settings.
    #[must_use]
    pub fn generator_builder(&self) -> GeneratorBuilder {
        let mut builder = GeneratorBuilder::new();
        builder
            .header(&self.header)
            .suffix(&self.suffix)
            .gender_rule(GenderRule::new(&self.gender.from, &self.gender.to))
            .options(self.options())
            .layout(self.layout());
        for (base, alternatives) in &self.variants {
            builder.variant(*base, alternatives);
        }
        builder
    }
}
