//! Transitions and the per-firing transition context.

use serde::{Deserialize, Serialize};

/// A legal move: firing `event` while in `from` leads to `to`.
///
/// Transitions are immutable values. A registry accepts a transition
/// only if neither its event name nor its `(from, to)` pair is taken.
///
/// # Example
///
/// ```rust
/// use safe_fsm::core::Transition;
///
/// let freeze = Transition::new("freeze", "LIQUID", "SOLID");
/// assert_eq!(freeze.event, "freeze");
/// assert!(freeze.leaves("LIQUID"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// Name of the event that triggers this transition
    pub event: String,
    /// Source state
    pub from: String,
    /// Target state
    pub to: String,
}

impl Transition {
    pub fn new(event: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when this transition starts at `state`.
    pub fn leaves(&self, state: &str) -> bool {
        self.from == state
    }

    /// True when this transition shares its `(from, to)` pair with `other`.
    pub fn same_path(&self, other: &Transition) -> bool {
        self.from == other.from && self.to == other.to
    }
}

/// What hooks can see about the firing in progress.
///
/// The machine fills this in at the start of every `fire` and clears
/// all four fields before `fire` returns, committed or not. Outside a
/// firing every accessor returns `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionContext {
    pub(crate) transition_name: Option<String>,
    pub(crate) from_state: Option<String>,
    pub(crate) to_state: Option<String>,
    pub(crate) next_state: Option<String>,
}

impl TransitionContext {
    /// Event currently being fired.
    pub fn transition_name(&self) -> Option<&str> {
        self.transition_name.as_deref()
    }

    /// State the machine was in when the event fired.
    pub fn from_state(&self) -> Option<&str> {
        self.from_state.as_deref()
    }

    /// Target of the matched transition, if one matched.
    pub fn to_state(&self) -> Option<&str> {
        self.to_state.as_deref()
    }

    /// Set to the target only while the on-hooks run, after guards passed.
    pub fn next_state(&self) -> Option<&str> {
        self.next_state.as_deref()
    }

    pub fn is_clear(&self) -> bool {
        self.transition_name.is_none()
            && self.from_state.is_none()
            && self.to_state.is_none()
            && self.next_state.is_none()
    }

    pub(crate) fn begin(&mut self, event: &str, current: Option<&str>, to: Option<&str>) {
        self.transition_name = Some(event.to_string());
        self.from_state = current.map(str::to_string);
        if let Some(to) = to {
            self.to_state = Some(to.to_string());
        }
        self.next_state = None;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_path_ignores_event_name() {
        let a = Transition::new("freeze", "LIQUID", "SOLID");
        let b = Transition::new("solidify", "LIQUID", "SOLID");
        let c = Transition::new("melt", "SOLID", "LIQUID");

        assert!(a.same_path(&b));
        assert!(!a.same_path(&c));
    }

    #[test]
    fn context_begin_and_clear() {
        let mut ctx = TransitionContext::default();
        assert!(ctx.is_clear());

        ctx.begin("condense", Some("GAS"), Some("LIQUID"));
        assert_eq!(ctx.transition_name(), Some("condense"));
        assert_eq!(ctx.from_state(), Some("GAS"));
        assert_eq!(ctx.to_state(), Some("LIQUID"));
        assert_eq!(ctx.next_state(), None);

        ctx.clear();
        assert!(ctx.is_clear());
    }

    #[test]
    fn begin_without_match_leaves_target_unset() {
        let mut ctx = TransitionContext::default();
        ctx.begin("freeze", None, None);

        assert_eq!(ctx.transition_name(), Some("freeze"));
        assert_eq!(ctx.from_state(), None);
        assert_eq!(ctx.to_state(), None);
    }

    #[test]
    fn transition_serializes_correctly() {
        let transition = Transition::new("condense", "GAS", "LIQUID");
        let json = serde_json::to_string(&transition).unwrap();
        let deserialized: Transition = serde_json::from_str(&json).unwrap();
        assert_eq!(transition, deserialized);
    }
}
