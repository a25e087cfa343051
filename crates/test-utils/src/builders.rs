#![allow(dead_code)]

use taskorder::Task;
use taskorder::config::{CatalogueFile, ConfigSection};
use taskorder::types::CyclePolicy;

/// Builder for a task list to simplify test setup.
pub struct CatalogueBuilder {
    tasks: Vec<Task>,
    cycle_policy: CyclePolicy,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            cycle_policy: CyclePolicy::default(),
        }
    }

    pub fn task(mut self, name: &str, deps: &[&str]) -> Self {
        self.tasks.push(Task::new(name, deps.iter().copied()));
        self
    }

    pub fn cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    pub fn build(self) -> Vec<Task> {
        self.tasks
    }

    pub fn build_file(self) -> CatalogueFile {
        CatalogueFile {
            config: ConfigSection {
                cycle_policy: self.cycle_policy,
            },
            task: self.tasks,
        }
    }
}

impl Default for CatalogueBuilder {
    fn default() -> Self {
        Self::new()
    }
}
