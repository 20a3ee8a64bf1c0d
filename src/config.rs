use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::report::{DEFAULT_CSV_FILE, DEFAULT_REPORT_FILE};

pub(crate) const DATA_FILE: &str = "remittance_data.json";
pub(crate) const DATA_ENV: &str = "REMITTUI_DATA";

/// Where the store lives and where exports go by default.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    pub(crate) data_path: PathBuf,
    pub(crate) report_path: PathBuf,
    pub(crate) csv_path: PathBuf,
}

impl Config {
    /// Build the config from the process arguments and environment.
    ///
    /// `--data <path>` (or `--data=<path>`) is removed from the returned
    /// arguments; everything else is left for the command dispatcher.
    pub(crate) fn from_args(args: Vec<String>) -> Result<(Self, Vec<String>)> {
        let (flag, rest) = split_data_flag(args)?;
        let env = std::env::var_os(DATA_ENV).map(PathBuf::from);
        let data_path = match flag.or(env) {
            Some(path) => path,
            None => default_data_path()?,
        };
        Ok((Self::with_data_path(data_path), rest))
    }

    pub(crate) fn with_data_path(data_path: PathBuf) -> Self {
        Self {
            data_path,
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            csv_path: PathBuf::from(DEFAULT_CSV_FILE),
        }
    }
}

fn split_data_flag(args: Vec<String>) -> Result<(Option<PathBuf>, Vec<String>)> {
    let mut data = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--data" {
            let value = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("--data requires a file path"))?;
            data = Some(PathBuf::from(crate::run::shellexpand(&value)));
        } else if let Some(value) = arg.strip_prefix("--data=") {
            data = Some(PathBuf::from(crate::run::shellexpand(value)));
        } else {
            rest.push(arg);
        }
    }
    Ok((data, rest))
}

fn default_data_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "remittui", "Remittui")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join(DATA_FILE))
}
