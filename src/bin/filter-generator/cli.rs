use clap::{ArgAction, Args, Parser, Subcommand};
use filter_generator::{Config, QuoteStyle};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "filter-generator",
    version,
    about = "Generate chat filter regular expressions from a word list",
    long_about = "Generate chat filter regular expressions from a word list.\n\n\
        Words are read one per line. Prefix a word with '!' to block it even inside other text; \
        lines starting with '#' are comments."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Increase logging verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level selected by the flags, if any was given.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        if self.quiet {
            return Some(LevelFilter::ERROR);
        }
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::DEBUG),
            _ => Some(LevelFilter::TRACE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Write the filter document generated from the word list (default).
    Generate,
    /// Print the filter document without writing any file.
    Preview,
    /// Edit the word list interactively with a live preview.
    Edit,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Settings file [default: filter-generator.toml, if present].
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Word list to read.
    #[arg(long, global = true, value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// Filter document to write.
    #[arg(long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also generate the alternate-gender form of words ending in the gender suffix.
    #[arg(long, global = true)]
    pub gender_variants: bool,

    /// Do not write a '# word' title above each pattern.
    #[arg(long, global = true)]
    pub no_titles: bool,

    /// Write patterns as quoted strings instead of list items.
    #[arg(long, global = true)]
    pub quoted: bool,

    /// Number of spaces before every entry line.
    #[arg(long, global = true, value_name = "SPACES")]
    pub indent: Option<usize>,
}

impl SettingsArgs {
    /// Overrides `config` with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(words) = &self.words {
            config.words_file = words.clone();
        }
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        if self.gender_variants {
            config.gender_variants = true;
        }
        if self.no_titles {
            config.titles = false;
        }
        if self.quoted {
            config.quote_style = QuoteStyle::Quoted;
        }
        if let Some(indent) = self.indent {
            config.indent = indent;
        }
    }
}
