//! Hook callables, the convention-hook provider and the hook table.
//!
//! Every firing runs three phases (before, on, after). Each phase first
//! runs the provider's convention hook for the event, if one exists, and
//! then the explicitly registered hooks in registration order.

mod callable;
mod provider;
mod table;

pub use callable::{Action, Guard, HookRef, Method};
pub use provider::{HookProvider, MethodTable};
pub use table::HookTable;
