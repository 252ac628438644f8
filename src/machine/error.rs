//! Build errors for strict machine construction.

use crate::core::FsmError;
use thiserror::Error;

/// Errors a strict `StateMachineBuilder::build` can return.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("{} invalid transition(s): {}", .0.len(), describe(.0))]
    InvalidTransitions(Vec<FsmError>),

    #[error("Initial state '{state}' is not a registered state")]
    UnknownInitialState { state: String },
}

fn describe(errors: &[FsmError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
