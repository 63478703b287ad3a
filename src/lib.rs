//! Generates regular expressions that catch disguised words in chat text.
//!
//! Chat users get past plain word filters by decorating words: color codes between letters,
//! look-alike characters (`s3x`), separators (`s-e-x`) and repeated letters. This crate turns a
//! word list into expressions that see through those tricks, written as a filter document for
//! chat plugins.
//!
//! Words are written one per line. A word prefixed with `!` is *strong*: it is caught even inside
//! longer text. Other words are *normal*: they are only caught on their own, so that `sex` does
//! not catch `Essex`.
//!
//! # Example
//! ```
//! use filter_generator::Generator;
//!
//! let document = Generator::default().document("sex\n!bitch").unwrap();
//!
//! let text = document.to_string();
//! assert!(text.starts_with("filters:\n\n# sex\n- (?i)"));
//! assert_eq!(document.pattern_count(), 2);
//! ```

mod builder;
pub mod config;
pub mod document;
pub mod entry;
mod error;
pub mod loader;
pub mod pattern;
pub mod persistence;
mod variants;

pub use builder::{Generator, GeneratorBuilder};
pub use config::Config;
pub use document::{Layout, Line, LineKind, OutputDocument, QuoteStyle};
pub use entry::{EntryProcessor, GenderRule, GeneratedEntry, Options, WordEntry};
pub use error::{Error, Result};
pub use pattern::{Mode, PatternBuilder};
pub use variants::VariantTable;
