// src/config/mod.rs

//! Catalogue files: data model, loading, and validation.
//!
//! - `model.rs`: the serde-backed file model (TOML or JSON).
//! - `loader.rs`: read a file from disk, picking the format by extension.
//! - `validate.rs`: basic checks on load, plus an opt-in strict pass over
//!   the whole dependency graph.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    CatalogueFormat, default_catalogue_path, load_and_validate, load_from_path, parse_str,
};
pub use model::{CatalogueFile, ConfigSection};
pub use validate::{ValidationReport, validate_catalogue, validate_config};
