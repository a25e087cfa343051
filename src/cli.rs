// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::loader::default_catalogue_path;
use crate::types::CyclePolicy;

/// Command-line arguments for `taskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskorder",
    version,
    about = "Print requested tasks in an order that respects their dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Tasks to order, in request order. Unknown names are ignored.
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,

    /// Path to the task catalogue (TOML, or JSON when the extension is `.json`).
    #[arg(long, value_name = "PATH", default_value_os_t = default_catalogue_path())]
    pub catalogue: PathBuf,

    /// What to do when a dependency cycle is found.
    ///
    /// Overrides `[config].cycle_policy` from the catalogue file.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub cycle_policy: Option<CyclePolicy>,

    /// Also request every task in the catalogue, in file order.
    #[arg(long)]
    pub all: bool,

    /// Check the whole catalogue for cycles, duplicates and unknown
    /// dependencies before resolving.
    #[arg(long)]
    pub check: bool,

    /// Print the result as a JSON array instead of one task per line.
    #[arg(long)]
    pub json: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
