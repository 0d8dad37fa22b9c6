//! `quotekeep` binary.
//!
//! # Responsibility
//! - Parse the command line and resolve configuration.
//! - Open the store once, run one command against it, close it.
//! - Map outcomes to process exit codes.
//!
//! # Exit codes
//! - `0`: success, or console input closed mid-workflow.
//! - `1`: runtime failure, or the user declined to replace an invalid store.
//! - `2`: usage error (reported by clap).

mod brainy;
mod cli;
mod config;

use anyhow::Context;
use brainy::BrainyQuoteSource;
use clap::{CommandFactory, Parser};
use cli::{join_author, Cli, Commands, DbArgs};
use config::AppConfig;
use log::{error, info};
use quotekeep_core::workflow::{delete, export, list, menu, recover, save, search};
use quotekeep_core::{init_logging, QuoteStore, SaveRequest, StdConsole, WorkflowError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Get { author, .. } = &cli.command {
        if join_author(author).is_none() {
            Cli::command()
                .error(
                    clap::error::ErrorKind::MissingRequiredArgument,
                    "AUTHOR must contain at least one non-blank word",
                )
                .exit();
        }
    }

    let config = match AppConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: could not resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    match run(&cli.command, &config) {
        Ok(code) => code,
        Err(err) => {
            error!("event=app_exit module=cli status=error");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Commands, config: &AppConfig) -> anyhow::Result<ExitCode> {
    let mut console = StdConsole::stdio();

    let mut store = match recover::open_or_recreate(&config.db_path, &mut console) {
        Ok(Some(store)) => store,
        Ok(None) | Err(WorkflowError::InputClosed) => return Ok(ExitCode::FAILURE),
        Err(err) => {
            return Err(err).with_context(|| {
                format!("could not open quote store {}", config.db_path.display())
            })
        }
    };

    let outcome = dispatch(command, &store, &mut console);
    store.close().context("could not close quote store")?;

    match outcome {
        Ok(()) | Err(WorkflowError::InputClosed) => {
            console.say("Goodbye!")?;
            info!("event=app_exit module=cli status=ok");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(err.into()),
    }
}

fn dispatch(
    command: &Commands,
    store: &QuoteStore,
    console: &mut StdConsole,
) -> Result<(), WorkflowError> {
    match command {
        Commands::Get {
            author,
            num,
            quiet,
        } => {
            let request = SaveRequest {
                // Blank authors are rejected before the store is opened.
                author: join_author(author).unwrap_or_default(),
                limit: *num,
                quiet: *quiet,
            };
            let source = BrainyQuoteSource::new()?;
            save::fetch_and_save(&source, store, console, &request)?;
        }
        Commands::Db(args) => run_db_mode(args, store, console)?,
    }
    Ok(())
}

fn run_db_mode(
    args: &DbArgs,
    store: &QuoteStore,
    console: &mut StdConsole,
) -> Result<(), WorkflowError> {
    if args.interactive {
        menu::run_menu(store, console)
    } else if args.print {
        list::print_all(store, console).map(|_| ())
    } else if let Some(fragment) = &args.search {
        search::search(store, console, Some(fragment))
    } else if args.delete {
        delete::delete_one(store, console).map(|_| ())
    } else if let Some(file_name) = &args.dump {
        export::export(store, console, Some(file_name)).map(|_| ())
    } else {
        // clap's required group guarantees one mode is set.
        menu::run_menu(store, console)
    }
}
