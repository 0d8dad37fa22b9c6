//! Delete-one workflow.
//!
//! Selection is constrained to the freshly rendered menu, so only ids that
//! existed a moment ago can reach `delete_quote`.

use super::console::Console;
use super::list::render_quote_row;
use super::{
    delimiter, parse_ordinal, WorkflowResult, CONSOLE_DELIMITER_WIDTH, EMPTY_STORE_MESSAGE,
};
use crate::model::quote::QuoteId;
use crate::repo::quote_repo::QuoteRepository;
use log::debug;
use std::io::{BufRead, Write};

const SELECT_PROMPT: &str = "Please select the number of the quote to delete: ";
const CONFIRM_PROMPT: &str = "Are you sure you want to delete this quote (y/n): ";

/// Lets the user pick one quote from a numbered menu and deletes it after
/// confirmation.
///
/// Returns the deleted id, or `None` when the store is empty or the user did
/// not confirm.
pub fn delete_one<R, I, O>(
    repo: &R,
    console: &mut Console<I, O>,
) -> WorkflowResult<Option<QuoteId>>
where
    R: QuoteRepository + ?Sized,
    I: BufRead,
    O: Write,
{
    let quotes = repo.list_quotes()?;
    if quotes.is_empty() {
        console.say(EMPTY_STORE_MESSAGE)?;
        return Ok(None);
    }

    console.say("Num | ID | Author")?;
    console.say(delimiter(CONSOLE_DELIMITER_WIDTH))?;
    for (ordinal, quote) in quotes.iter().enumerate() {
        console.say(format!("{ordinal}: {} | {}", quote.id, quote.author))?;
    }

    let selected = loop {
        let choice = console.prompt(SELECT_PROMPT)?;
        match parse_ordinal(&choice, quotes.len()) {
            Some(ordinal) => break &quotes[ordinal],
            None => console.say("Input not found.")?,
        }
    };

    console.say(render_quote_row(selected))?;
    console.say(delimiter(CONSOLE_DELIMITER_WIDTH))?;

    if !console.confirm(CONFIRM_PROMPT)? {
        debug!(
            "event=quote_delete module=workflow status=cancelled id={}",
            selected.id
        );
        return Ok(None);
    }

    if repo.delete_quote(selected.id)? {
        console.say("Deleted.")?;
        Ok(Some(selected.id))
    } else {
        console.say("That quote no longer exists.")?;
        Ok(None)
    }
}
