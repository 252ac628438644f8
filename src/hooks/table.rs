//! Explicitly registered hooks.

use super::callable::{Action, Guard};
use std::collections::HashMap;

/// Per-event hook lists for the three phases.
///
/// Lists are append-only and keep registration order. There is no
/// removal and no de-duplication.
pub struct HookTable<T> {
    before: HashMap<String, Vec<Guard<T>>>,
    on: HashMap<String, Vec<Action<T>>>,
    after: HashMap<String, Vec<Action<T>>>,
}

impl<T> HookTable<T> {
    pub fn new() -> Self {
        Self {
            before: HashMap::new(),
            on: HashMap::new(),
            after: HashMap::new(),
        }
    }

    pub fn add_before(&mut self, event: &str, guard: Guard<T>) {
        self.before.entry(event.to_string()).or_default().push(guard);
    }

    pub fn add_on(&mut self, event: &str, action: Action<T>) {
        self.on.entry(event.to_string()).or_default().push(action);
    }

    pub fn add_after(&mut self, event: &str, action: Action<T>) {
        self.after.entry(event.to_string()).or_default().push(action);
    }

    pub fn before(&self, event: &str) -> &[Guard<T>] {
        self.before.get(event).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn on(&self, event: &str) -> &[Action<T>] {
        self.on.get(event).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn after(&self, event: &str) -> &[Action<T>] {
        self.after.get(event).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<T> Default for HookTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
