// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod types;

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::CatalogueFile;
use crate::config::validate::validate_catalogue;

pub use crate::dag::{Catalogue, Resolver, Task, resolve, resolve_with_policy};
pub use crate::errors::{Result as TaskorderResult, TaskorderError};
pub use crate::types::CyclePolicy;

/// High-level entry point used by `main.rs`.
///
/// Loads the catalogue, optionally runs the strict check, resolves the
/// request and prints the order to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.catalogue)?;
    let order = order_for_args(&cfg, &args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_order(&mut out, &order, args.json)?;
    out.flush()?;

    Ok(())
}

/// Everything `run` does except reading the file and writing stdout.
pub fn order_for_args(cfg: &CatalogueFile, args: &CliArgs) -> Result<Vec<String>> {
    if args.check {
        let report = validate_catalogue(&cfg.task)?;
        info!(
            duplicates = report.duplicates.len(),
            unknown_dependencies = report.unknown_dependencies.len(),
            "catalogue check passed"
        );
    }

    let policy = args.cycle_policy.unwrap_or(cfg.config.cycle_policy);
    let request = build_request(cfg, args);
    debug!(?request, %policy, "resolving request");

    let catalogue = cfg.catalogue();
    let order = Resolver::new(&catalogue)
        .with_cycle_policy(policy)
        .resolve(&request)?;

    Ok(order)
}

/// Explicit task names first, then (with `--all`) every catalogue task.
fn build_request(cfg: &CatalogueFile, args: &CliArgs) -> Vec<String> {
    let mut request = args.tasks.clone();
    if args.all {
        request.extend(cfg.task_names().map(str::to_string));
    }
    request
}

/// Write the order either one name per line or as a JSON array.
pub fn write_order<W: Write>(out: &mut W, order: &[String], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, order)?;
        writeln!(out)?;
    } else {
        for name in order {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}
