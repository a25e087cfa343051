// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::CatalogueFile;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// On-disk encoding of a catalogue file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueFormat {
    Toml,
    Json,
}

impl CatalogueFormat {
    /// `.json` files are JSON; everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogueFormat::Json,
            _ => CatalogueFormat::Toml,
        }
    }
}

/// Parse catalogue text in the given format without any validation.
pub fn parse_str(contents: &str, format: CatalogueFormat) -> Result<CatalogueFile> {
    let file: CatalogueFile = match format {
        CatalogueFormat::Toml => toml::from_str(contents)?,
        CatalogueFormat::Json => serde_json::from_str(contents)?,
    };
    Ok(file)
}

/// Load a catalogue file and return the raw `CatalogueFile`.
///
/// This only deserializes; see [`load_and_validate`] for the checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CatalogueFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let format = CatalogueFormat::from_path(path);

    let file = parse_str(&contents, format)?;
    debug!(
        path = %path.display(),
        ?format,
        tasks = file.task.len(),
        "loaded catalogue file"
    );

    Ok(file)
}

/// Load a catalogue file and run the basic checks from
/// [`validate_config`].
///
/// Dependency problems (unknown names, cycles) are not checked here: the
/// resolver tolerates unknown names and applies the configured cycle
/// policy. Use [`crate::config::validate_catalogue`] for a strict pass.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<CatalogueFile> {
    let file = load_from_path(&path)?;
    validate_config(&file)?;
    Ok(file)
}

/// Catalogue path used when none is given on the command line.
pub fn default_catalogue_path() -> PathBuf {
    PathBuf::from("Taskorder.toml")
}
