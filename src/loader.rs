//! Reading the word list.

use crate::{persistence, Error, Result};
use std::{fs, io, path::Path};
use tracing::{info, warn};

/// Word list written when none exists yet.
pub const SAMPLE_WORDS: &str = "\
# Normal words are only blocked on their own: 'sex' is blocked, 'Essex' and 'Sussex' are not.
# Strong words are blocked even inside other text: '!bitch' also blocks 'sonofabitch'.
# Normal words need no prefix.
# Strong words are prefixed with '!'.
Passive
!Hard
sex
!bitch
";

/// Returns the text of the word list at `path`.
///
/// If there is no file at `path`, the [`SAMPLE_WORDS`] are written there first and returned.
///
/// # Errors
/// Fails if the file cannot be read, or if the sample cannot be written.
pub fn load_or_create(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            info!(path = %path.display(), "loaded word list");
            Ok(text)
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "word list does not exist, creating an example");
            persistence::save(path, SAMPLE_WORDS)?;
            Ok(SAMPLE_WORDS.to_owned())
        }
        Err(source) => Err(Error::Read {
            path: path.to_owned(),
            source,
        }),
    }
}
