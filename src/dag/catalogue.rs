// src/dag/catalogue.rs

use std::collections::HashMap;

use tracing::debug;

use crate::dag::task::Task;

/// Name-keyed lookup of every known task's dependency list.
///
/// Built once from the caller's task list and never mutated afterwards, so
/// a `&Catalogue` can be shared freely between concurrent resolutions.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    deps: HashMap<String, Vec<String>>,
    /// Task names in the order they were first seen.
    order: Vec<String>,
}

impl Catalogue {
    /// Build a catalogue from an ordered list of tasks.
    ///
    /// A name that appears more than once keeps the dependencies of its
    /// *last* occurrence, but its position in [`Catalogue::task_names`]
    /// is that of its first.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut deps: HashMap<String, Vec<String>> = HashMap::with_capacity(tasks.len());
        let mut order = Vec::with_capacity(tasks.len());

        for task in tasks {
            match deps.insert(task.name.clone(), task.dependencies.clone()) {
                Some(_) => debug!(task = %task.name, "duplicate task name; last definition wins"),
                None => order.push(task.name.clone()),
            }
        }

        Self { deps, order }
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deps.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.deps.contains_key(name)
    }

    /// Declared dependencies of a task, or an empty slice for unknown names.
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.deps.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The catalogue's own key for `name` together with its dependencies.
    pub(crate) fn lookup(&self, name: &str) -> Option<(&str, &[String])> {
        self.deps
            .get_key_value(name)
            .map(|(key, deps)| (key.as_str(), deps.as_slice()))
    }

    /// All task names, deduplicated, in first-seen order.
    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl From<&[Task]> for Catalogue {
    fn from(tasks: &[Task]) -> Self {
        Catalogue::from_tasks(tasks)
    }
}
