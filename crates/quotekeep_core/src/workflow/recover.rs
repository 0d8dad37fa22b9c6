//! Store opening with interactive recovery from foreign files.

use super::console::Console;
use super::WorkflowResult;
use crate::db::DbError;
use crate::store::QuoteStore;
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::Path;

const RECREATE_PROMPT: &str = "Would you like to delete the old file? (y/n): ";

/// Opens the store at `path`, offering to replace a file that is not a
/// quotekeep store.
///
/// Returns `None` when the user declines; the caller should exit with a
/// failure status.
pub fn open_or_recreate<I, O>(
    path: &Path,
    console: &mut Console<I, O>,
) -> WorkflowResult<Option<QuoteStore>>
where
    I: BufRead,
    O: Write,
{
    let invalid_path = match QuoteStore::open(path) {
        Ok(store) => return Ok(Some(store)),
        Err(DbError::InvalidStoreFile { path }) => path,
        Err(err) => return Err(err.into()),
    };

    console.say(format!(
        "ERROR: {} is not a quotekeep database!",
        invalid_path.display()
    ))?;

    if !console.confirm(RECREATE_PROMPT)? {
        warn!("event=store_recreate module=workflow status=declined");
        console.say("")?;
        console.say("ERROR: Cannot continue with an invalid database file.")?;
        console.say("Please delete or rename the file to continue.")?;
        return Ok(None);
    }

    console.say(format!("Deleting {}...", invalid_path.display()))?;
    std::fs::remove_file(&invalid_path)?;

    console.say("Creating new database file...")?;
    let store = QuoteStore::open(path)?;
    info!("event=store_recreate module=workflow status=ok");
    Ok(Some(store))
}
