//! Safe FSM: a small, forgiving finite-state machine with hooks
//!
//! Applications declare named transitions (`event: from -> to`), attach
//! before/on/after hooks and fire events. Bad input never panics or
//! errors by default: unknown events, duplicate transitions, reserved
//! event names and repeated seeding all quietly do nothing.
//!
//! # Core Concepts
//!
//! - **Registry**: the growing set of legal transitions and derived names
//! - **Hooks**: guards that can veto a transition, actions that react to it,
//!   and convention hooks (`beforeFreeze`, `onFreeze`, `afterFreeze`) found
//!   by name
//! - **Machine**: the current state and the fire protocol
//! - **Logger**: a separate leveled logging facade with an ordered file queue
//!
//! # Example
//!
//! ```rust
//! use safe_fsm::core::TransitionContext;
//! use safe_fsm::StateMachine;
//!
//! #[derive(Default)]
//! struct Water {
//!     temperature: i32,
//! }
//!
//! let mut machine = StateMachine::new(Water { temperature: 100 });
//! machine.define_transition("freeze", "LIQUID", "SOLID");
//! machine.define_transition("condense", "GAS", "LIQUID");
//! machine.define_guard("beforeCondense", |w: &mut Water, _: &TransitionContext| {
//!     w.temperature < 120
//! });
//!
//! machine.set_initial("GAS");
//! machine.fire("condense");
//! machine.invoke("freeze");
//!
//! assert_eq!(machine.current_state(), Some("SOLID"));
//! assert_eq!(machine.list_states(), vec!["GAS", "LIQUID", "SOLID"]);
//! ```

pub mod core;
pub mod hooks;
pub mod log;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{FsmError, Registry, Transition, TransitionContext};
pub use hooks::{Action, Guard, HookProvider, HookRef, MethodTable};
pub use log::{AppInfo, LogQueue, Logger, LoggerConfig, Severity};
pub use machine::{BuildError, FireOutcome, MachineConfig, StateMachine, StateMachineBuilder};
