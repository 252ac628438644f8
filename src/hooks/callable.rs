//! Hook callables.
//!
//! Hooks are bound to the machine's application data: they receive the
//! data mutably and the live `TransitionContext` read-only. Guards answer
//! whether a transition may proceed; actions just run.

use crate::core::TransitionContext;
use std::fmt;
use std::sync::Arc;

type Predicate<T> = dyn Fn(&mut T, &TransitionContext) -> bool + Send + Sync;
type Effect<T> = dyn Fn(&mut T, &TransitionContext) + Send + Sync;

/// Before-hook that can veto a transition.
///
/// # Example
///
/// ```rust
/// use safe_fsm::core::TransitionContext;
/// use safe_fsm::hooks::Guard;
///
/// struct Water {
///     temperature: i32,
/// }
///
/// let cool_enough = Guard::new(|w: &mut Water, _: &TransitionContext| w.temperature < 120);
/// let ctx = TransitionContext::default();
///
/// assert!(cool_enough.check(&mut Water { temperature: 100 }, &ctx));
/// assert!(!cool_enough.check(&mut Water { temperature: 130 }, &ctx));
/// ```
pub struct Guard<T> {
    predicate: Arc<Predicate<T>>,
}

impl<T> Guard<T> {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&mut T, &TransitionContext) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    pub fn check(&self, data: &mut T, ctx: &TransitionContext) -> bool {
        (self.predicate)(data, ctx)
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

/// On- or after-hook. Its outcome is never observed by the machine.
pub struct Action<T> {
    effect: Arc<Effect<T>>,
}

impl<T> Action<T> {
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn(&mut T, &TransitionContext) + Send + Sync + 'static,
    {
        Action {
            effect: Arc::new(effect),
        }
    }

    pub fn run(&self, data: &mut T, ctx: &TransitionContext) {
        (self.effect)(data, ctx)
    }
}

impl<T: 'static> From<Guard<T>> for Action<T> {
    /// Run a guard as an action, discarding its verdict.
    fn from(guard: Guard<T>) -> Self {
        Action::new(move |data: &mut T, ctx: &TransitionContext| {
            guard.check(data, ctx);
        })
    }
}

impl<T> Clone for Action<T> {
    fn clone(&self) -> Self {
        Self {
            effect: Arc::clone(&self.effect),
        }
    }
}

impl<T> fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// A named method a provider can hand out.
#[derive(Debug)]
pub enum Method<T> {
    Guard(Guard<T>),
    Action(Action<T>),
}

impl<T: 'static> Method<T> {
    /// Usable in the before phase only if it is a guard.
    pub fn as_guard(&self) -> Option<Guard<T>> {
        match self {
            Self::Guard(guard) => Some(guard.clone()),
            Self::Action(_) => None,
        }
    }

    /// Any method can run in the on and after phases.
    pub fn as_action(&self) -> Action<T> {
        match self {
            Self::Guard(guard) => Action::from(guard.clone()),
            Self::Action(action) => action.clone(),
        }
    }
}

impl<T> Clone for Method<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Guard(guard) => Self::Guard(guard.clone()),
            Self::Action(action) => Self::Action(action.clone()),
        }
    }
}

/// A hook given either directly or by the name of a provider method.
#[derive(Debug)]
pub enum HookRef<H> {
    Direct(H),
    Named(String),
}

impl<T> From<Guard<T>> for HookRef<Guard<T>> {
    fn from(guard: Guard<T>) -> Self {
        Self::Direct(guard)
    }
}

impl<T> From<Action<T>> for HookRef<Action<T>> {
    fn from(action: Action<T>) -> Self {
        Self::Direct(action)
    }
}

impl<H> From<&str> for HookRef<H> {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl<H> From<String> for HookRef<H> {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        hits: u32,
        limit: u32,
    }

    #[test]
    fn guard_sees_data_and_context() {
        let guard = Guard::new(|c: &mut Counter, ctx: &TransitionContext| {
            c.hits += 1;
            ctx.transition_name() == Some("tick") && c.hits <= c.limit
        });
        let mut ctx = TransitionContext::default();
        ctx.begin("tick", Some("A"), Some("B"));
        let mut counter = Counter { hits: 0, limit: 1 };

        assert!(guard.check(&mut counter, &ctx));
        assert!(!guard.check(&mut counter, &ctx));
        assert_eq!(counter.hits, 2);
    }

    #[test]
    fn action_mutates_data() {
        let action = Action::new(|c: &mut Counter, _: &TransitionContext| c.hits += 10);
        let mut counter = Counter::default();

        action.run(&mut counter, &TransitionContext::default());
        action.clone().run(&mut counter, &TransitionContext::default());

        assert_eq!(counter.hits, 20);
    }

    #[test]
    fn guard_runs_as_action() {
        let method = Method::Guard(Guard::new(|c: &mut Counter, _: &TransitionContext| {
            c.hits += 1;
            false
        }));
        let mut counter = Counter::default();

        method.as_action().run(&mut counter, &TransitionContext::default());

        assert_eq!(counter.hits, 1);
        assert!(method.as_guard().is_some());
    }

    #[test]
    fn action_is_not_a_guard() {
        let method: Method<Counter> = Method::Action(Action::new(|_, _| {}));
        assert!(method.as_guard().is_none());
    }

    #[test]
    fn hook_ref_from_name() {
        let by_name: HookRef<Guard<Counter>> = "beforeTick".into();
        assert!(matches!(by_name, HookRef::Named(name) if name == "beforeTick"));
    }
}
