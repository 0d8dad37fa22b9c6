//! Print-all workflow.

use super::console::Console;
use super::{delimiter, WorkflowResult, CONSOLE_DELIMITER_WIDTH, EMPTY_STORE_MESSAGE};
use crate::model::quote::Quote;
use crate::repo::quote_repo::QuoteRepository;
use std::io::{BufRead, Write};

/// Prints every saved quote, newest first. Returns how many were printed.
pub fn print_all<R, I, O>(repo: &R, console: &mut Console<I, O>) -> WorkflowResult<usize>
where
    R: QuoteRepository + ?Sized,
    I: BufRead,
    O: Write,
{
    let quotes = repo.list_quotes()?;
    if quotes.is_empty() {
        console.say(EMPTY_STORE_MESSAGE)?;
        return Ok(0);
    }

    for quote in &quotes {
        console.say(render_quote_row(quote))?;
        console.say(delimiter(CONSOLE_DELIMITER_WIDTH))?;
    }

    Ok(quotes.len())
}

/// Single-line rendering: `<id> | <author> | <text> | <timestamp>`.
pub fn render_quote_row(quote: &Quote) -> String {
    format!(
        "{} | {} | {} | {}",
        quote.id,
        quote.author,
        quote.text,
        quote.created_at_display()
    )
}
