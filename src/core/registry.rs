//! Registry of legal transitions.
//!
//! The registry only grows. It keeps transitions in insertion order and
//! derives the sorted sets of state and event names from them. Invalid
//! registrations are absorbed: `define_transition` leaves the registry
//! untouched and logs the reason at debug level.

use super::error::{FsmError, FsmResult};
use super::naming::shortcut_name;
use super::reserved::is_reserved;
use super::transition::Transition;
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Set of registered transitions plus the names derived from them.
///
/// # Example
///
/// ```rust
/// use safe_fsm::core::Registry;
///
/// let mut registry = Registry::new();
/// registry.define_transition("freeze", "LIQUID", "SOLID");
/// registry.define_transition("condense", "GAS", "LIQUID");
/// registry.define_transition("default", "A", "B"); // reserved, ignored
///
/// assert_eq!(registry.list_events(), vec!["condense", "freeze"]);
/// assert_eq!(registry.list_states(), vec!["GAS", "LIQUID", "SOLID"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Registry {
    transitions: Vec<Transition>,
    states: BTreeSet<String>,
    events: BTreeSet<String>,
    shortcuts: BTreeMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `event: from -> to`, silently ignoring invalid input.
    pub fn define_transition(&mut self, event: &str, from: &str, to: &str) {
        if let Err(error) = self.try_define_transition(event, from, to) {
            tracing::debug!(%error, event, from, to, "transition ignored");
        }
    }

    /// Register `event: from -> to`, reporting why a registration was refused.
    pub fn try_define_transition(&mut self, event: &str, from: &str, to: &str) -> FsmResult<()> {
        let candidate = Transition::new(event, from, to);
        self.check(&candidate)?;

        self.states.insert(candidate.from.clone());
        self.states.insert(candidate.to.clone());
        self.events.insert(candidate.event.clone());

        // the first event to claim a shortcut name keeps it
        let shortcut = shortcut_name(&candidate.event);
        let owner = self
            .shortcuts
            .entry(shortcut.clone())
            .or_insert_with(|| candidate.event.clone());
        if *owner != candidate.event {
            tracing::warn!(
                %shortcut,
                event = %candidate.event,
                existing = %owner,
                "shortcut already taken, event only reachable by name"
            );
        }
        self.transitions.push(candidate);
        Ok(())
    }

    /// Check a whole table against this registry and against itself.
    ///
    /// Unlike `try_define_transition`, every problem is collected rather
    /// than stopping at the first one. Nothing is registered.
    pub fn validate(&self, table: &[Transition]) -> Validation<(), NonEmptyVec<FsmError>> {
        let mut scratch = self.clone();
        let checks: Vec<Validation<(), NonEmptyVec<FsmError>>> = table
            .iter()
            .map(|t| match scratch.try_define_transition(&t.event, &t.from, &t.to) {
                Ok(()) => Validation::success(()),
                Err(error) => Validation::fail(error),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    fn check(&self, candidate: &Transition) -> FsmResult<()> {
        if candidate.event.is_empty() || candidate.from.is_empty() || candidate.to.is_empty() {
            return Err(FsmError::EmptyName {
                event: candidate.event.clone(),
                from: candidate.from.clone(),
                to: candidate.to.clone(),
            });
        }

        if is_reserved(&candidate.event) {
            return Err(FsmError::ReservedEvent {
                event: candidate.event.clone(),
            });
        }

        if self.events.contains(&candidate.event) {
            return Err(FsmError::DuplicateEvent {
                event: candidate.event.clone(),
            });
        }

        if self.transitions.iter().any(|t| t.same_path(candidate)) {
            return Err(FsmError::DuplicateTransition {
                from: candidate.from.clone(),
                to: candidate.to.clone(),
            });
        }

        Ok(())
    }

    /// All registered state names, sorted and deduplicated.
    pub fn list_states(&self) -> Vec<&str> {
        self.states.iter().map(String::as_str).collect()
    }

    /// All registered event names, sorted and deduplicated.
    pub fn list_events(&self) -> Vec<&str> {
        self.events.iter().map(String::as_str).collect()
    }

    /// Transitions in registration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    pub fn has_event(&self, event: &str) -> bool {
        self.events.contains(event)
    }

    /// The transition `event` selects when the machine is in `from`.
    pub fn find(&self, event: &str, from: Option<&str>) -> Option<&Transition> {
        let from = from?;
        self.transitions
            .iter()
            .find(|t| t.event == event && t.leaves(from))
    }

    /// Event fired by the shortcut called `name`.
    pub fn shortcut(&self, name: &str) -> Option<&str> {
        self.shortcuts.get(name).map(String::as_str)
    }

    /// Installed shortcut names, sorted.
    pub fn shortcuts(&self) -> impl Iterator<Item = &str> {
        self.shortcuts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
