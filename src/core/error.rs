//! Error kinds for the registry and the engine.
//!
//! The default APIs never return these. They are absorbed and reported
//! through `tracing` instead; the `try_*` variants hand them back to
//! callers that want to know why nothing happened.

use thiserror::Error;

/// Reasons a registry, seed, fire or hook-registration call was absorbed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Event name '{event}' is a reserved word")]
    ReservedEvent { event: String },

    #[error("Transition names must be non-empty (event: '{event}', from: '{from}', to: '{to}')")]
    EmptyName {
        event: String,
        from: String,
        to: String,
    },

    #[error("Event '{event}' is already registered")]
    DuplicateEvent { event: String },

    #[error("A transition from '{from}' to '{to}' is already registered")]
    DuplicateTransition { from: String, to: String },

    #[error("Unknown event '{event}'")]
    UnknownEvent { event: String },

    #[error("No transition for event '{event}' from state {from:?}")]
    NoTransition { event: String, from: Option<String> },

    #[error("Guard blocked event '{event}' from state {from:?}")]
    GuardBlocked { event: String, from: Option<String> },

    #[error("State '{state}' is not registered")]
    UnknownState { state: String },

    #[error("Initial state already set to '{current}'")]
    AlreadySeeded { current: String },

    #[error("Hook name '{name}' does not resolve to a usable method")]
    UnresolvedHookName { name: String },
}

/// Result type for strict registry and engine operations.
pub type FsmResult<T> = Result<T, FsmError>;
