// src/dag/resolver.rs

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::dag::catalogue::Catalogue;
use crate::dag::task::Task;
use crate::errors::{Result, TaskorderError};
use crate::types::CyclePolicy;

/// Per-name state during one resolution.
///
/// A name missing from the state map is unvisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// On the active chain; its dependencies are still being walked.
    InProgress,
    /// Already appended to the output.
    Emitted,
}

/// One entry of the explicit work stack: a task plus the index of the next
/// dependency to look at.
#[derive(Debug)]
struct Frame<'a> {
    name: &'a str,
    deps: &'a [String],
    next: usize,
}

/// Orders a requested subset of tasks so every task comes after all of its
/// transitive prerequisites.
///
/// The walk is a depth-first post-order traversal seeded by the request in
/// the order given, descending into dependencies in the order they were
/// declared. A `Resolver` only borrows its catalogue, so the same
/// catalogue can back many resolvers at once.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalogue: &'a Catalogue,
    policy: CyclePolicy,
}

impl<'a> Resolver<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self {
            catalogue,
            policy: CyclePolicy::default(),
        }
    }

    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve `request` into a dependency-respecting sequence.
    ///
    /// - Names not in the catalogue are dropped, both in the request and in
    ///   dependency lists.
    /// - A name requested (or depended on) more than once is emitted once,
    ///   at the position where the walk first reached it.
    /// - With [`CyclePolicy::Fail`] a cycle aborts the whole call and no
    ///   partial order is returned.
    pub fn resolve<S: AsRef<str>>(&self, request: &[S]) -> Result<Vec<String>> {
        if self.catalogue.is_empty() || request.is_empty() {
            trace!("empty catalogue or request; nothing to resolve");
            return Ok(Vec::new());
        }

        let mut walk = Walk::new(self.catalogue, self.policy);
        for name in request {
            walk.visit(name.as_ref())?;
        }

        debug!(
            requested = request.len(),
            resolved = walk.order.len(),
            policy = %self.policy,
            "resolved task order"
        );
        Ok(walk.order)
    }
}

/// Mutable state of a single resolution call.
struct Walk<'a> {
    catalogue: &'a Catalogue,
    policy: CyclePolicy,
    states: HashMap<&'a str, VisitState>,
    stack: Vec<Frame<'a>>,
    order: Vec<String>,
}

impl<'a> Walk<'a> {
    fn new(catalogue: &'a Catalogue, policy: CyclePolicy) -> Self {
        Self {
            catalogue,
            policy,
            states: HashMap::with_capacity(catalogue.len()),
            stack: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Walk everything reachable from `root` that has not been emitted yet.
    fn visit(&mut self, root: &str) -> Result<()> {
        if !self.enter(root)? {
            return Ok(());
        }

        while let Some(frame) = self.stack.last_mut() {
            let deps = frame.deps;
            match deps.get(frame.next) {
                Some(dep) => {
                    frame.next += 1;
                    self.enter(dep)?;
                }
                None => {
                    let name = frame.name;
                    self.stack.pop();
                    self.states.insert(name, VisitState::Emitted);
                    trace!(task = name, "emitted");
                    self.order.push(name.to_string());
                }
            }
        }

        Ok(())
    }

    /// Push a frame for `name` if it is known and unvisited.
    ///
    /// Returns `true` when a frame was pushed.
    fn enter(&mut self, name: &str) -> Result<bool> {
        let catalogue = self.catalogue;
        let Some((key, deps)) = catalogue.lookup(name) else {
            trace!(task = name, "not in catalogue; skipping");
            return Ok(false);
        };

        match self.states.get(key).copied() {
            Some(VisitState::Emitted) => Ok(false),
            Some(VisitState::InProgress) => self.on_cycle(key).map(|()| false),
            None => {
                self.states.insert(key, VisitState::InProgress);
                self.stack.push(Frame {
                    name: key,
                    deps,
                    next: 0,
                });
                Ok(true)
            }
        }
    }

    fn on_cycle(&self, task: &str) -> Result<()> {
        match self.policy {
            CyclePolicy::Fail => {
                let start = self
                    .stack
                    .iter()
                    .position(|f| f.name == task)
                    .unwrap_or(0);
                let mut path: Vec<String> = self.stack[start..]
                    .iter()
                    .map(|f| f.name.to_string())
                    .collect();
                path.push(task.to_string());

                Err(TaskorderError::CycleDetected {
                    task: task.to_string(),
                    path,
                })
            }
            CyclePolicy::Break => {
                let from = self.stack.last().map(|f| f.name).unwrap_or(task);
                debug!(task, from, "cycle detected; treating edge as satisfied");
                Ok(())
            }
        }
    }
}

/// Resolve `request` against `tasks`, failing on cycles.
///
/// Builds a fresh [`Catalogue`] for the call; use [`Resolver`] directly to
/// reuse one catalogue across many requests.
pub fn resolve<S: AsRef<str>>(tasks: &[Task], request: &[S]) -> Result<Vec<String>> {
    resolve_with_policy(tasks, request, CyclePolicy::Fail)
}

/// Like [`resolve`], with an explicit cycle policy.
pub fn resolve_with_policy<S: AsRef<str>>(
    tasks: &[Task],
    request: &[S],
    policy: CyclePolicy,
) -> Result<Vec<String>> {
    if tasks.is_empty() || request.is_empty() {
        return Ok(Vec::new());
    }

    let catalogue = Catalogue::from_tasks(tasks);
    Resolver::new(&catalogue)
        .with_cycle_policy(policy)
        .resolve(request)
}
