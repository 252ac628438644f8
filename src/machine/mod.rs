//! The state machine: current state, hook dispatch and the fire protocol.
//!
//! Firing an event runs, in order:
//! 1. every guard (convention `before<Event>` first, then registered ones)
//! 2. if all passed and a transition leaves the current state: the
//!    on-hooks, the state commit, the optional trace line, the after-hooks
//! 3. a reset of the transition context, whatever happened above

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod macros;

pub use builder::StateMachineBuilder;
pub use config::{MachineConfig, TRACE_ENV_VALUE, TRACE_ENV_VARS};
pub use engine::{FireOutcome, StateMachine};
pub use error::BuildError;
