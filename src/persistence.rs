//! Writing the word list and the generated document to disk.
//!
//! Files are written to a temporary file next to the destination, which then replaces the
//! destination. A failed write leaves the previous file untouched.

use crate::{Error, OutputDocument, Result};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::info;

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Write {
        path: path.to_owned(),
        source,
    }
}

/// Atomically replaces the contents of `path` with `contents`.
///
/// Missing parent directories are created.
///
/// # Errors
/// Returns [`Error::Write`] naming `path` if any step fails.
pub fn save(path: &Path, contents: &str) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_owned(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent_dir).map_err(write_error(path))?;

    let mut temp_file = NamedTempFile::new_in(&parent_dir).map_err(write_error(path))?;
    temp_file
        .write_all(contents.as_bytes())
        .and_then(|()| temp_file.flush())
        .map_err(write_error(path))?;
    temp_file
        .persist(path)
        .map_err(|error| write_error(path)(error.error))?;

    info!(path = %path.display(), bytes = contents.len(), "saved");
    Ok(())
}

/// Saves the word list, then the document generated from it.
///
/// The word list is saved first so that entered words survive a failure to write the document.
/// An empty document is not written.
///
/// # Errors
/// Returns [`Error::Write`] for the first file that could not be written, and
/// [`Error::EmptyInput`] if the document holds no patterns.
pub fn save_all(
    words_path: &Path,
    words: &str,
    output_path: &Path,
    document: &OutputDocument,
) -> Result<()> {
    save(words_path, words)?;
    if document.is_empty() {
        return Err(Error::EmptyInput);
    }
    save(output_path, &document.to_string())
}
