// src/config/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::config::model::CatalogueFile;
use crate::dag::{Catalogue, Resolver, Task};
use crate::errors::{Result, TaskorderError};

/// Basic sanity checks applied to every loaded catalogue file.
pub fn validate_config(cfg: &CatalogueFile) -> Result<()> {
    for (idx, task) in cfg.task.iter().enumerate() {
        if task.name.trim().is_empty() {
            return Err(TaskorderError::ConfigError(format!(
                "task #{} has an empty name",
                idx + 1
            )));
        }
        if task.dependencies.iter().any(|d| d.trim().is_empty()) {
            return Err(TaskorderError::ConfigError(format!(
                "task '{}' lists an empty dependency name",
                task.name
            )));
        }
    }
    Ok(())
}

/// Findings from [`validate_catalogue`] that do not stop resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Names defined more than once, in the order the repeat was found.
    pub duplicates: Vec<String>,
    /// `(task, dependency)` pairs whose dependency is not a catalogue task.
    pub unknown_dependencies: Vec<(String, String)>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.unknown_dependencies.is_empty()
    }
}

/// Whole-catalogue check, independent of any request.
///
/// Duplicates and unknown dependencies are reported and logged as warnings.
/// A cycle anywhere in the catalogue is an error.
pub fn validate_catalogue(tasks: &[Task]) -> Result<ValidationReport> {
    let catalogue = Catalogue::from_tasks(tasks);
    let mut report = ValidationReport::default();

    let mut seen: HashSet<&str> = HashSet::new();
    for task in tasks {
        if !seen.insert(task.name.as_str()) && !report.duplicates.contains(&task.name) {
            warn!(task = %task.name, "task defined more than once; last definition wins");
            report.duplicates.push(task.name.clone());
        }
    }

    // Edge direction: dep -> task.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for name in catalogue.task_names() {
        graph.add_node(name);
    }
    for name in catalogue.task_names() {
        for dep in catalogue.dependencies_of(name) {
            if catalogue.contains(dep) {
                graph.add_edge(dep.as_str(), name, ());
            } else {
                warn!(task = name, dependency = %dep, "unknown dependency will be ignored");
                report
                    .unknown_dependencies
                    .push((name.to_string(), dep.clone()));
            }
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(report),
        Err(cycle) => {
            let node = cycle.node_id();
            // `node` lies on the cycle, and a depth-first walk from any node
            // on a cycle re-enters its own active chain, so the walk fails
            // with the full path. The `Ok` arm is unreachable unless toposort
            // names a node off the cycle; it still reports the cycle there.
            match Resolver::new(&catalogue).resolve(&[node]) {
                Err(err) => Err(err),
                Ok(_) => Err(TaskorderError::CycleDetected {
                    task: node.to_string(),
                    path: vec![node.to_string()],
                }),
            }
        }
    }
}
