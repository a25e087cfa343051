// src/types.rs

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// What the resolver does when a dependency chain leads back to a task
/// that is still being visited.
///
/// - `Fail`: stop and report [`TaskorderError::CycleDetected`] (default).
/// - `Break`: treat the cyclic edge as already satisfied and keep going.
///   The task that closed the cycle is emitted with whatever dependencies
///   were resolved before the cycle was found.
///
/// [`TaskorderError::CycleDetected`]: crate::errors::TaskorderError::CycleDetected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    #[default]
    Fail,
    Break,
}

impl FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Ok(CyclePolicy::Fail),
            "break" => Ok(CyclePolicy::Break),
            other => Err(format!(
                "invalid cycle_policy: {other} (expected \"fail\" or \"break\")"
            )),
        }
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CyclePolicy::Fail => f.write_str("fail"),
            CyclePolicy::Break => f.write_str("break"),
        }
    }
}
