//! Terminal display of a filter document.

use crossterm::style::Stylize;
use filter_generator::{LineKind, OutputDocument};
use std::io::{self, Write};

/// Writes `document`, styling comment lines apart from patterns when `color` is set.
pub fn write_document<W>(out: &mut W, document: &OutputDocument, color: bool) -> io::Result<()>
where
    W: Write,
{
    for line in document.lines() {
        let text = line.text.as_str();
        match (color, line.kind) {
            (false, _) | (true, LineKind::Blank) => writeln!(out, "{}", text)?,
            (true, LineKind::Header) => writeln!(out, "{}", text.bold())?,
            (true, LineKind::Title) => writeln!(out, "{}", text.dark_cyan().italic())?,
            (true, LineKind::Pattern) => writeln!(out, "{}", text.white())?,
        }
    }
    Ok(())
}

/// Writes a warning line.
pub fn write_warning<W>(out: &mut W, message: &str, color: bool) -> io::Result<()>
where
    W: Write,
{
    if color {
        writeln!(out, "{}", format!("⚠️ {}", message).dark_yellow().bold())
    } else {
        writeln!(out, "⚠️ {}", message)
    }
}
