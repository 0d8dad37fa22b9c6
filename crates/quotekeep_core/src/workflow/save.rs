//! Fetch-and-save workflow.
//!
//! Candidates come from a [`QuoteSource`]; the user saves any number of them
//! by ordinal and finishes with `done`.

use super::console::Console;
use super::{delimiter, parse_ordinal, WorkflowResult, CONSOLE_DELIMITER_WIDTH};
use crate::model::quote::{NewQuote, QuoteId};
use crate::repo::quote_repo::QuoteRepository;
use crate::source::QuoteSource;
use log::{info, warn};
use std::io::{BufRead, Write};

/// Default number of candidates shown per search.
pub const DEFAULT_LIMIT: usize = 10;

const PICK_PROMPT: &str = "Please pick a quote to save (or enter done to exit): ";
const DONE_KEYWORD: &str = "done";

/// Parameters of one fetch-and-save run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub author: String,
    /// Maximum number of candidates rendered and selectable.
    pub limit: usize,
    /// Only show candidates, skip the selection loop.
    pub quiet: bool,
}

impl SaveRequest {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            limit: DEFAULT_LIMIT,
            quiet: false,
        }
    }
}

/// Fetches candidates for `request.author`, shows them and runs the
/// selection loop unless `quiet` is set.
///
/// # Errors
/// - `WorkflowError::Fetch` when the source fails. Nothing is saved and the
///   fetch is not retried.
pub fn fetch_and_save<S, R, I, O>(
    source: &S,
    repo: &R,
    console: &mut Console<I, O>,
    request: &SaveRequest,
) -> WorkflowResult<Vec<QuoteId>>
where
    S: QuoteSource + ?Sized,
    R: QuoteRepository + ?Sized,
    I: BufRead,
    O: Write,
{
    console.say(format!("Searching for {}...", request.author))?;

    let mut candidates = source
        .fetch_quotes(&request.author, request.limit)
        .inspect_err(|err| warn!("event=quote_fetch module=workflow status=error error={err}"))?;
    candidates.truncate(request.limit);
    info!(
        "event=quote_fetch module=workflow status=ok count={}",
        candidates.len()
    );

    if candidates.is_empty() {
        console.say(format!("No quotes found for {}.", request.author))?;
        return Ok(Vec::new());
    }

    render_candidates(console, &request.author, &candidates)?;
    if request.quiet {
        return Ok(Vec::new());
    }

    save_selection(repo, console, &request.author, &candidates)
}

/// Prints candidates as `<ordinal>. <text>` blocks.
pub fn render_candidates<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    author: &str,
    candidates: &[String],
) -> WorkflowResult<()> {
    console.say(format!("Found the following matches for {author}:"))?;
    console.say(delimiter(CONSOLE_DELIMITER_WIDTH))?;
    for (ordinal, text) in candidates.iter().enumerate() {
        console.say(format!("{ordinal}. {text}"))?;
        console.say(delimiter(CONSOLE_DELIMITER_WIDTH))?;
    }
    Ok(())
}

/// Saves candidates picked by ordinal until the user enters `done`.
///
/// Returns the ids of the quotes saved, in the order they were picked.
pub fn save_selection<R, I, O>(
    repo: &R,
    console: &mut Console<I, O>,
    author: &str,
    candidates: &[String],
) -> WorkflowResult<Vec<QuoteId>>
where
    R: QuoteRepository + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut saved = Vec::new();
    if candidates.is_empty() {
        return Ok(saved);
    }

    loop {
        let choice = console.prompt(PICK_PROMPT)?;
        if choice.trim().eq_ignore_ascii_case(DONE_KEYWORD) {
            return Ok(saved);
        }

        let Some(ordinal) = parse_ordinal(&choice, candidates.len()) else {
            console.say(format!(
                "That is an invalid input. Please enter a number between 0 and {}.",
                candidates.len() - 1
            ))?;
            continue;
        };

        let id = repo.insert_quote(&NewQuote::now(author, candidates[ordinal].as_str()))?;
        saved.push(id);
        console.say(format!("Saved the quote you picked by {author}. Good choice!"))?;
    }
}
