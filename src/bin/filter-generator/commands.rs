use crate::preview::{write_document, write_warning};
use anyhow::Context;
use filter_generator::{loader, persistence, Config, Error};
use std::io::{self, IsTerminal};
use tracing::info;

/// Generates the document from the configured word list and writes it.
///
/// An empty word list is reported and nothing is written.
pub fn run_generate(config: &Config) -> anyhow::Result<()> {
    let words = loader::load_or_create(&config.words_file)?;
    let generator = config.generator_builder().build();
    let mut stdout = io::stdout().lock();
    let color = io::stdout().is_terminal();

    let document = match generator.document(&words) {
        Ok(document) => document,
        Err(Error::EmptyInput) => {
            write_warning(
                &mut stdout,
                &format!(
                    "No words found in {}. Nothing saved to {}.",
                    config.words_file.display(),
                    config.output_file.display()
                ),
                color,
            )?;
            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    write_document(&mut stdout, &document, color)?;
    persistence::save(&config.output_file, &document.to_string())
        .context("the generated filters were not saved")?;
    info!(
        patterns = document.pattern_count(),
        path = %config.output_file.display(),
        "filters written"
    );
    Ok(())
}

/// Prints the document generated from the configured word list.
pub fn run_preview(config: &Config) -> anyhow::Result<()> {
    let words = loader::load_or_create(&config.words_file)?;
    let document = config.generator_builder().build().preview(&words);
    let mut stdout = io::stdout().lock();
    let color = io::stdout().is_terminal();

    if document.is_empty() {
        write_warning(&mut stdout, "No words to process.", color)?;
    } else {
        write_document(&mut stdout, &document, color)?;
    }
    Ok(())
}
