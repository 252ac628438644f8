//! Transition registry and the types it is built from.
//!
//! This module holds the parts of the machine that carry no behavior of
//! their own:
//! - `Transition` triples and the per-firing `TransitionContext`
//! - the `Registry` that accepts or absorbs new transitions
//! - the reserved-word denylist for event names
//! - derived names (fire shortcuts and convention hook names)

mod error;
mod naming;
mod registry;
mod reserved;
mod transition;

pub use error::{FsmError, FsmResult};
pub use naming::{convention_name, shortcut_name, Phase};
pub use registry::Registry;
pub use reserved::{is_reserved, RESERVED_WORDS};
pub use transition::{Transition, TransitionContext};
