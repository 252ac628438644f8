//! Convention hooks looked up by name.
//!
//! A provider answers "is there a `beforeCondense` method?" for the
//! machine. The default provider, `MethodTable`, is a plain map from
//! method name to callable filled in while the machine is set up.

use super::callable::{Action, Guard, Method};
use crate::core::{convention_name, Phase, TransitionContext};
use std::collections::HashMap;

/// Source of convention hooks and named methods.
///
/// The phase lookups receive the raw event name; implementations decide
/// how that maps to a method. `MethodTable` uses `convention_name`.
pub trait HookProvider<T> {
    /// Resolve a method by its exact name.
    fn resolve(&self, name: &str) -> Option<Method<T>>;

    fn before_hook(&self, event: &str) -> Option<Guard<T>>;

    fn on_hook(&self, event: &str) -> Option<Action<T>>;

    fn after_hook(&self, event: &str) -> Option<Action<T>>;
}

/// Name-to-method map used as the default `HookProvider`.
///
/// # Example
///
/// ```rust
/// use safe_fsm::core::TransitionContext;
/// use safe_fsm::hooks::{HookProvider, MethodTable};
///
/// struct Water {
///     temperature: i32,
/// }
///
/// let mut methods = MethodTable::new();
/// methods.define_guard("beforeCondense", |w: &mut Water, _: &TransitionContext| {
///     w.temperature < 120
/// });
///
/// assert!(methods.before_hook("condense").is_some());
/// assert!(methods.before_hook("freeze").is_none());
/// ```
pub struct MethodTable<T> {
    methods: HashMap<String, Method<T>>,
}

impl<T: 'static> MethodTable<T> {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Define (or replace) a method that returns a verdict.
    pub fn define_guard<F>(&mut self, name: impl Into<String>, guard: F) -> &mut Self
    where
        F: Fn(&mut T, &TransitionContext) -> bool + Send + Sync + 'static,
    {
        self.define(name, Method::Guard(Guard::new(guard)))
    }

    /// Define (or replace) a method that returns nothing.
    pub fn define_action<F>(&mut self, name: impl Into<String>, action: F) -> &mut Self
    where
        F: Fn(&mut T, &TransitionContext) + Send + Sync + 'static,
    {
        self.define(name, Method::Action(Action::new(action)))
    }

    pub fn define(&mut self, name: impl Into<String>, method: Method<T>) -> &mut Self {
        self.methods.insert(name.into(), method);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    fn lookup(&self, phase: Phase, event: &str) -> Option<&Method<T>> {
        self.methods.get(&convention_name(phase, event))
    }
}

impl<T: 'static> Default for MethodTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Clone for MethodTable<T> {
    fn clone(&self) -> Self {
        Self {
            methods: self.methods.clone(),
        }
    }
}

impl<T: 'static> HookProvider<T> for MethodTable<T> {
    fn resolve(&self, name: &str) -> Option<Method<T>> {
        self.methods.get(name).cloned()
    }

    fn before_hook(&self, event: &str) -> Option<Guard<T>> {
        self.lookup(Phase::Before, event).and_then(Method::as_guard)
    }

    fn on_hook(&self, event: &str) -> Option<Action<T>> {
        self.lookup(Phase::On, event).map(Method::as_action)
    }

    fn after_hook(&self, event: &str) -> Option<Action<T>> {
        self.lookup(Phase::After, event).map(Method::as_action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log {
        entries: Vec<String>,
    }

    fn table() -> MethodTable<Log> {
        let mut methods = MethodTable::new();
        methods
            .define_guard("beforeMelt", |_: &mut Log, _: &TransitionContext| true)
            .define_action("onMelt", |log: &mut Log, _: &TransitionContext| {
                log.entries.push("onMelt".into())
            })
            .define_guard("afterMelt", |log: &mut Log, _: &TransitionContext| {
                log.entries.push("afterMelt".into());
                false
            })
            .define_action("beforeFreeze", |_: &mut Log, _: &TransitionContext| {});
        methods
    }

    #[test]
    fn phase_lookups_use_convention_names() {
        let methods = table();

        assert!(methods.before_hook("melt").is_some());
        assert!(methods.on_hook("melt").is_some());
        assert!(methods.after_hook("melt").is_some());
        assert!(methods.on_hook("freeze").is_none());
    }

    #[test]
    fn action_is_not_used_as_before_hook() {
        let methods = table();
        assert!(methods.before_hook("freeze").is_none());
    }

    #[test]
    fn guard_runs_in_after_phase() {
        let methods = table();
        let mut log = Log::default();

        let after = methods.after_hook("melt").unwrap();
        after.run(&mut log, &TransitionContext::default());

        assert_eq!(log.entries, vec!["afterMelt"]);
    }

    #[test]
    fn resolve_by_exact_name() {
        let methods = table();

        assert!(methods.resolve("onMelt").is_some());
        assert!(methods.resolve("melt").is_none());
        assert_eq!(methods.len(), 4);
    }
}
