// src/dag/mod.rs

//! Task catalogue and dependency ordering.
//!
//! - [`task`] is the plain task value (name + ordered dependencies).
//! - [`catalogue`] turns a task list into a name-keyed lookup.
//! - [`resolver`] walks the catalogue depth-first to order a requested
//!   subset of tasks.

pub mod catalogue;
pub mod resolver;
pub mod task;

pub use catalogue::Catalogue;
pub use resolver::{Resolver, resolve, resolve_with_policy};
pub use task::Task;
