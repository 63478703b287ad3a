//! Interactive word list editing with a live preview.
//!
//! Every entered line is added to the word list, and the preview is regenerated from the whole
//! list after each change.

use crate::preview::{write_document, write_warning};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use filter_generator::{
    loader, persistence, Config, Error, Generator, GeneratorBuilder, Layout, Options,
    OutputDocument, QuoteStyle,
};
use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
};

/// Indentation levels cycled through by `:indent`: 0, 2 and 4.
const INDENT_STEP: usize = 2;
const INDENT_LIMIT: usize = 6;

const HELP: &str = "\
Type a word and press Enter to add it ('!word' for a strong word, '# text' for a comment).
  :gender   toggle gender variants      :titles   toggle titles
  :quotes   toggle quoted patterns      :indent   cycle indentation (0, 2, 4)
  :delete   remove the last line        :save     save both files
  :help     show this help              :quit     leave (asks to save unsaved changes)";

/// A line typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Line(String),
    ToggleGender,
    ToggleTitles,
    ToggleQuotes,
    CycleIndent,
    Delete,
    Save,
    Help,
    Quit,
    /// An unrecognized `:` command.
    Unknown(String),
    Empty,
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => Input::Empty,
            ":gender" => Input::ToggleGender,
            ":titles" => Input::ToggleTitles,
            ":quotes" => Input::ToggleQuotes,
            ":indent" => Input::CycleIndent,
            ":delete" => Input::Delete,
            ":save" => Input::Save,
            ":help" => Input::Help,
            ":quit" | ":q" => Input::Quit,
            command if command.starts_with(':') => Input::Unknown(command.to_owned()),
            line => Input::Line(line.to_owned()),
        }
    }
}

/// State of an editing session.
#[derive(Debug)]
pub struct Session {
    words: String,
    builder: GeneratorBuilder,
    options: Options,
    layout: Layout,
    words_path: PathBuf,
    output_path: PathBuf,
    dirty: bool,
}

impl Session {
    pub fn new(config: &Config, words: String) -> Self {
        Self {
            words,
            builder: config.generator_builder(),
            options: config.options(),
            layout: config.layout(),
            words_path: config.words_file.clone(),
            output_path: config.output_file.clone(),
            dirty: false,
        }
    }

    #[cfg(test)]
    pub fn words(&self) -> &str {
        &self.words
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn generator(&self) -> Generator {
        let mut builder = self.builder.clone();
        builder.options(self.options).layout(self.layout);
        builder.build()
    }

    pub fn preview(&self) -> OutputDocument {
        self.generator().preview(&self.words)
    }

    /// Applies an editing input. Returns whether anything changed.
    pub fn apply(&mut self, input: &Input) -> bool {
        match input {
            Input::Line(line) => {
                if !self.words.is_empty() && !self.words.ends_with('\n') {
                    self.words.push('\n');
                }
                self.words.push_str(line);
                self.words.push('\n');
            }
            Input::ToggleGender => self.options.toggle(Options::GENDER_VARIANTS),
            Input::ToggleTitles => self.options.toggle(Options::TITLES),
            Input::ToggleQuotes => {
                self.layout.quote_style = match self.layout.quote_style {
                    QuoteStyle::ListItem => QuoteStyle::Quoted,
                    QuoteStyle::Quoted => QuoteStyle::ListItem,
                }
            }
            Input::CycleIndent => {
                self.layout.indent =
                    (self.layout.indent / INDENT_STEP + 1) * INDENT_STEP % INDENT_LIMIT;
            }
            Input::Delete => {
                let trimmed = self.words.trim_end_matches('\n');
                if trimmed.is_empty() {
                    return false;
                }
                let keep = trimmed.rfind('\n').map_or(0, |index| index + 1);
                self.words.truncate(keep);
            }
            _ => return false,
        }
        self.dirty = true;
        true
    }

    /// Gives up the unsaved changes. Nothing on disk is touched.
    pub fn discard(&mut self) {
        self.dirty = false;
    }

    /// Saves the word list and, if it yields any pattern, the document.
    ///
    /// The session stays dirty only if a file could not be written.
    pub fn save(&mut self) -> filter_generator::Result<()> {
        let result = persistence::save_all(
            &self.words_path,
            &self.words,
            &self.output_path,
            &self.preview(),
        );
        if matches!(result, Ok(()) | Err(Error::EmptyInput)) {
            self.dirty = false;
        }
        result
    }
}

fn render<W>(out: &mut W, session: &Session, color: bool) -> io::Result<()>
where
    W: Write,
{
    if color {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    let document = session.preview();
    if document.is_empty() {
        write_warning(out, "No words to process.", color)?;
    } else {
        write_document(out, &document, color)?;
    }
    let options = session.options;
    writeln!(
        out,
        "\n[gender variants: {}] [titles: {}] [quotes: {}] [indent: {}]{}",
        on_off(options.contains(Options::GENDER_VARIANTS)),
        on_off(options.contains(Options::TITLES)),
        on_off(session.layout.quote_style == QuoteStyle::Quoted),
        session.layout.indent,
        if session.dirty { " *unsaved*" } else { "" },
    )?;
    prompt(out)
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn report_save<W>(out: &mut W, session: &mut Session, color: bool) -> io::Result<()>
where
    W: Write,
{
    match session.save() {
        Ok(()) => writeln!(
            out,
            "Saved {} and {}",
            session.words_path.display(),
            session.output_path.display()
        ),
        Err(Error::EmptyInput) => write_warning(
            out,
            &format!(
                "No words found. Nothing saved to {}",
                session.output_path.display()
            ),
            color,
        ),
        Err(error) => write_warning(out, &format!("{}", error), color),
    }
}

/// Runs the read-eval loop of `session` over `input`.
///
/// Unsaved changes are saved when `input` ends.
fn run_session<R, W>(input: R, out: &mut W, session: &mut Session, color: bool) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "{}\n", HELP)?;
    render(out, session, color)?;
    loop {
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(out)?;
                if session.is_dirty() {
                    report_save(out, session, color)?;
                }
                return Ok(());
            }
        };
        match Input::parse(&line) {
            Input::Save => {
                report_save(out, session, color)?;
                prompt(out)?;
            }
            Input::Help => {
                writeln!(out, "{}", HELP)?;
                prompt(out)?;
            }
            Input::Quit => {
                if !session.is_dirty() {
                    return Ok(());
                }
                write!(out, "Save changes before leaving? [y]es / [n]o / [c]ancel: ")?;
                out.flush()?;
                let answer = match lines.next() {
                    Some(answer) => answer?,
                    None => {
                        writeln!(out)?;
                        report_save(out, session, color)?;
                        return Ok(());
                    }
                };
                match answer.trim().to_lowercase().as_str() {
                    "y" | "yes" => {
                        report_save(out, session, color)?;
                        if !session.is_dirty() {
                            return Ok(());
                        }
                    }
                    "n" | "no" => {
                        session.discard();
                        return Ok(());
                    }
                    _ => {}
                }
                prompt(out)?;
            }
            Input::Unknown(command) => {
                writeln!(out, "Unknown command {}, type :help", command)?;
                prompt(out)?;
            }
            input => {
                session.apply(&input);
                render(out, session, color)?;
            }
        }
    }
}

fn prompt<W>(out: &mut W) -> io::Result<()>
where
    W: Write,
{
    write!(out, "> ")?;
    out.flush()
}

/// Runs an editing session on stdin and stdout.
pub fn run_edit(config: &Config) -> anyhow::Result<()> {
    let words = loader::load_or_create(&config.words_file)?;
    let mut session = Session::new(config, words);
    let color = io::stdout().is_terminal();

    run_session(
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut session,
        color,
    )?;
    if session.is_dirty() {
        anyhow::bail!(
            "changes to {} could not be saved",
            session.words_path.display()
        );
    }
    Ok(())
}
