//! Export-to-text-file workflow.
//!
//! # Invariants
//! - Target file names always end in `.txt`.
//! - Existing files are overwritten, never appended to.
//! - Each record is `<author>: <text>` followed by a 90-dash line.

use super::console::Console;
use super::WorkflowResult;
use crate::model::quote::Quote;
use crate::repo::quote_repo::QuoteRepository;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const EXPORT_DELIMITER_WIDTH: usize = 90;
const EXPORT_EXTENSION: &str = ".txt";
const FILE_NAME_PROMPT: &str = "Please enter the filename to save the quotes to: ";

/// Asks for (or takes) a file name and writes every quote to it.
///
/// Returns the path that was written.
pub fn export<R, I, O>(
    repo: &R,
    console: &mut Console<I, O>,
    preset: Option<&str>,
) -> WorkflowResult<PathBuf>
where
    R: QuoteRepository + ?Sized,
    I: BufRead,
    O: Write,
{
    let file_name = match preset.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => loop {
            let name = console.prompt(FILE_NAME_PROMPT)?;
            let name = name.trim();
            if !name.is_empty() {
                break name.to_string();
            }
            console.say("Please enter a file name.")?;
        },
    };

    let path = export_path(&file_name);
    export_to_file(repo, &path)?;
    console.say(format!(
        "Done! Your quotes can be found in {}",
        path.display()
    ))?;
    Ok(path)
}

/// Appends `.txt` unless the name already ends with it.
pub fn export_path(file_name: &str) -> PathBuf {
    if file_name.ends_with(EXPORT_EXTENSION) {
        PathBuf::from(file_name)
    } else {
        PathBuf::from(format!("{file_name}{EXPORT_EXTENSION}"))
    }
}

/// Writes all quotes to `path`, replacing any existing file.
///
/// Returns the number of quotes written.
pub fn export_to_file<R>(repo: &R, path: &Path) -> WorkflowResult<usize>
where
    R: QuoteRepository + ?Sized,
{
    let quotes = repo.list_quotes()?;

    let mut writer = BufWriter::new(File::create(path)?);
    write_export(&quotes, &mut writer)?;
    let file = writer.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;

    info!(
        "event=quote_export module=workflow status=ok count={}",
        quotes.len()
    );
    Ok(quotes.len())
}

/// Serializes quotes in export format.
pub fn write_export<W: Write>(quotes: &[Quote], writer: &mut W) -> std::io::Result<()> {
    let line = "-".repeat(EXPORT_DELIMITER_WIDTH);
    for quote in quotes {
        writeln!(writer, "{}: {}", quote.author, quote.text)?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::{export_path, write_export};
    use crate::model::quote::Quote;
    use std::path::PathBuf;

    #[test]
    fn export_path_appends_txt_once() {
        assert_eq!(export_path("quotes"), PathBuf::from("quotes.txt"));
        assert_eq!(export_path("quotes.txt"), PathBuf::from("quotes.txt"));
        assert_eq!(export_path("quotes.md"), PathBuf::from("quotes.md.txt"));
    }

    #[test]
    fn write_export_emits_author_text_and_delimiter() {
        let quotes = vec![Quote {
            id: 1,
            author: "Mark Twain".to_string(),
            text: "Get your facts first.".to_string(),
            created_at: 1,
        }];
        let mut buffer = Vec::new();

        write_export(&quotes, &mut buffer).unwrap();

        let expected = format!("Mark Twain: Get your facts first.\n{}\n", "-".repeat(90));
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    #[test]
    fn write_export_of_nothing_is_empty() {
        let mut buffer = Vec::new();
        write_export(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
