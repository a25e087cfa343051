// src/dag/task.rs

use serde::Deserialize;

/// A named unit of work plus the names it must come after.
///
/// Dependency names are kept in declaration order; that order decides the
/// resolver's walk. Names that never appear in the catalogue are allowed
/// and simply ignored during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    /// Task name. JSON data files spell this field `task`.
    #[serde(alias = "task")]
    pub name: String,

    /// Prerequisite names, in declaration order. TOML files may use `after`.
    #[serde(default, alias = "after")]
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new<N, I, D>(name: N, dependencies: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }
}
