//! Runtime configuration resolved from flags, environment and defaults.
//!
//! clap already folds `QUOTEKEEP_*` environment variables into the flags; this
//! module only fills in defaults and makes the log directory absolute.

use crate::cli::Cli;
use quotekeep_core::default_log_level;
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_FILE: &str = "quotes.db";
const APP_DIR_NAME: &str = "quotekeep";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Always absolute.
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::resolve(
            cli.db.clone(),
            cli.log_level.clone(),
            cli.log_dir.clone(),
            &cwd,
        ))
    }

    pub fn resolve(
        db_path: Option<PathBuf>,
        log_level: Option<String>,
        log_dir: Option<PathBuf>,
        cwd: &Path,
    ) -> Self {
        let log_dir = log_dir.unwrap_or_else(default_log_dir);
        Self {
            db_path: db_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE)),
            log_level: log_level.unwrap_or_else(|| default_log_level().to_string()),
            log_dir: absolutize(log_dir, cwd),
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join("logs")
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
