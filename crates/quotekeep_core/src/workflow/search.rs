//! Search-by-author workflow.

use super::console::Console;
use super::{delimiter, WorkflowResult, CONSOLE_DELIMITER_WIDTH};
use crate::model::quote::Quote;
use crate::repo::quote_repo::QuoteRepository;
use std::io::{BufRead, Write};

const FRAGMENT_PROMPT: &str = "Please enter an author to search for: ";
const AGAIN_PROMPT: &str = "Would you like to search again? (y/n): ";

/// Searches saved quotes by author fragment.
///
/// With a non-blank `preset` the search runs exactly once without prompting.
/// Otherwise the user is prompted for a fragment and searches again until
/// answering `n`.
pub fn search<R, I, O>(
    repo: &R,
    console: &mut Console<I, O>,
    preset: Option<&str>,
) -> WorkflowResult<()>
where
    R: QuoteRepository + ?Sized,
    I: BufRead,
    O: Write,
{
    if let Some(fragment) = preset.map(str::trim).filter(|fragment| !fragment.is_empty()) {
        let matches = repo.find_by_author_substring(fragment)?;
        return render_matches(console, fragment, &matches);
    }

    loop {
        let fragment = prompt_fragment(console)?;
        let matches = repo.find_by_author_substring(&fragment)?;
        render_matches(console, &fragment, &matches)?;

        if !console.ask_yes_no(AGAIN_PROMPT)? {
            return Ok(());
        }
    }
}

fn prompt_fragment<I: BufRead, O: Write>(console: &mut Console<I, O>) -> WorkflowResult<String> {
    loop {
        let fragment = console.prompt(FRAGMENT_PROMPT)?;
        let fragment = fragment.trim();
        if !fragment.is_empty() {
            return Ok(fragment.to_string());
        }
        console.say("Please enter at least one character.")?;
    }
}

fn render_matches<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    fragment: &str,
    matches: &[Quote],
) -> WorkflowResult<()> {
    if matches.is_empty() {
        console.say(format!("Sorry, did not find {fragment} in the database."))?;
        return Ok(());
    }

    console.say(format!("Found the following quotes by {fragment}:"))?;
    console.say(delimiter(CONSOLE_DELIMITER_WIDTH))?;
    for quote in matches {
        console.say(format!("{}: {}", quote.author, quote.text))?;
        console.say(delimiter(CONSOLE_DELIMITER_WIDTH))?;
    }
    Ok(())
}
