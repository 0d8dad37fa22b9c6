//! Top-level management menu loop.

use super::console::Console;
use super::{delete, export, list, search, WorkflowResult};
use crate::repo::quote_repo::QuoteRepository;
use std::io::{BufRead, Write};

/// One entry of the management menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PrintAll,
    Delete,
    Search,
    Export,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        Self::PrintAll,
        Self::Delete,
        Self::Search,
        Self::Export,
        Self::Exit,
    ];

    /// Maps the 1-based number shown in the menu to a choice.
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PrintAll => "Print all quotes",
            Self::Delete => "Delete a quote",
            Self::Search => "Search for author",
            Self::Export => "Export database to text file",
            Self::Exit => "[EXIT]",
        }
    }
}

/// Runs the menu until the user picks exit.
///
/// Bad input is reported and re-prompted; only store, I/O or closed-input
/// failures end the loop early.
pub fn run_menu<R, I, O>(repo: &R, console: &mut Console<I, O>) -> WorkflowResult<()>
where
    R: QuoteRepository + ?Sized,
    I: BufRead,
    O: Write,
{
    loop {
        console.say("Please enter a choice:")?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            console.say(format!("{}. {}", index + 1, choice.label()))?;
        }

        let input = console.prompt("> ")?;
        let Ok(number) = input.trim().parse::<u32>() else {
            console.say("Please enter a number.")?;
            continue;
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            console.say("Sorry, that is not a valid choice. Try again.")?;
            continue;
        };

        match choice {
            MenuChoice::PrintAll => {
                list::print_all(repo, console)?;
            }
            MenuChoice::Delete => {
                delete::delete_one(repo, console)?;
            }
            MenuChoice::Search => search::search(repo, console, None)?,
            MenuChoice::Export => {
                export::export(repo, console, None)?;
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}
