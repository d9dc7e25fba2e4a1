//! Error types for the orbit engine.

use std::fmt;

use crate::body::BodyId;

/// Errors reported by the engine and the scenario builders.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A body finished a step with a NaN or infinite position or velocity.
    NonFiniteState { id: BodyId, step: u64 },
    /// No scenario is registered under this name.
    UnknownScenario(String),
    /// A satellite was placed around a key that has not been added yet.
    UnknownParent(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NonFiniteState { id, step } => {
                write!(f, "Body {} has a non-finite state after step {}", id, step)
            }
            SimError::UnknownScenario(name) => write!(f, "Unknown scenario: {}", name),
            SimError::UnknownParent(key) => write!(f, "Unknown parent body: {}", key),
        }
    }
}

impl std::error::Error for SimError {}
