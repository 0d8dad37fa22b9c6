//! Command-line surface declared with clap derive.

use clap::{Args, Parser, Subcommand};
use quotekeep_core::workflow::save::DEFAULT_LIMIT;
use std::path::PathBuf;

/// Fetch quotations from the web and keep the ones you like.
#[derive(Parser, Debug)]
#[command(name = "quotekeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Quote database file
    #[arg(long, global = true, env = "QUOTEKEEP_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "QUOTEKEEP_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, global = true, env = "QUOTEKEEP_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the web for quotes by an author and pick some to save
    #[command(alias = "g")]
    Get {
        /// Author to search for
        #[arg(required = true, value_name = "AUTHOR")]
        author: Vec<String>,

        /// Number of retrieved quotes to show
        #[arg(short = 'n', long = "num", default_value_t = DEFAULT_LIMIT)]
        num: usize,

        /// Only show quotes, do not offer to save them
        #[arg(short, long)]
        quiet: bool,
    },

    /// Browse, search, delete and export saved quotes
    Db(DbArgs),
}

/// Exactly one management mode per invocation.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct DbArgs {
    /// Open the interactive management menu
    #[arg(short, long)]
    pub interactive: bool,

    /// Print all saved quotes
    #[arg(short, long)]
    pub print: bool,

    /// Search saved quotes by author
    #[arg(short, long, value_name = "AUTHOR")]
    pub search: Option<String>,

    /// Pick a saved quote to delete
    #[arg(short, long)]
    pub delete: bool,

    /// Write all saved quotes to a text file
    #[arg(long, value_name = "FILE")]
    pub dump: Option<String>,
}

/// Author words joined by single spaces, or `None` when only blanks were given.
pub fn join_author(words: &[String]) -> Option<String> {
    let author = words
        .iter()
        .flat_map(|word| word.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");
    (!author.is_empty()).then_some(author)
}
