// src/config/model.rs

use serde::Deserialize;

use crate::dag::{Catalogue, Task};
use crate::types::CyclePolicy;

/// A catalogue file as read from disk.
///
/// TOML layout:
///
/// ```toml
/// [config]
/// cycle_policy = "fail"
///
/// [[task]]
/// name = "get out of bed"
///
/// [[task]]
/// name = "earn money"
/// dependencies = ["get out of bed"]
/// ```
///
/// JSON data files use `{"data": [{"task": "...", "dependencies": [...]}]}`;
/// `data` is accepted as another name for `task`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogueFile {
    /// Behaviour settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// Tasks in file order. Duplicates are kept here; the last one wins
    /// once a [`Catalogue`] is built.
    #[serde(default, alias = "data")]
    pub task: Vec<Task>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// `"fail"` (default) or `"break"`.
    #[serde(default)]
    pub cycle_policy: CyclePolicy,
}

impl CatalogueFile {
    pub fn catalogue(&self) -> Catalogue {
        Catalogue::from_tasks(&self.task)
    }

    /// Task names in file order, duplicates included.
    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.task.iter().map(|t| t.name.as_str())
    }
}
