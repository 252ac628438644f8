//! Derived method names for events.
//!
//! Every event `e` owns four derived names: the fire shortcut (`e` in
//! lower camel case) and one convention hook name per phase
//! (`before_e`, `on_e`, `after_e`, each lower-camel-cased).

use heck::ToLowerCamelCase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three hook phases of a firing, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Before,
    On,
    After,
}

impl Phase {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::On => "on",
            Self::After => "after",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Convention hook name for `event` in `phase`.
///
/// ```rust
/// use safe_fsm::core::{convention_name, Phase};
///
/// assert_eq!(convention_name(Phase::Before, "condense"), "beforeCondense");
/// assert_eq!(convention_name(Phase::After, "turn_on"), "afterTurnOn");
/// ```
pub fn convention_name(phase: Phase, event: &str) -> String {
    format!("{}_{}", phase.prefix(), event).to_lower_camel_case()
}

/// Name of the fire shortcut installed for `event`.
pub fn shortcut_name(event: &str) -> String {
    event.to_lower_camel_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convention_names_are_lower_camel_case() {
        assert_eq!(convention_name(Phase::Before, "freeze"), "beforeFreeze");
        assert_eq!(convention_name(Phase::On, "freeze"), "onFreeze");
        assert_eq!(convention_name(Phase::After, "freeze"), "afterFreeze");
    }

    #[test]
    fn multi_segment_events_capitalize_each_segment() {
        assert_eq!(convention_name(Phase::On, "start_engine"), "onStartEngine");
        assert_eq!(convention_name(Phase::On, "startEngine"), "onStartEngine");
    }

    #[test]
    fn shortcut_name_lowercases_first_segment() {
        assert_eq!(shortcut_name("condense"), "condense");
        assert_eq!(shortcut_name("Melt_Down"), "meltDown");
        assert_eq!(shortcut_name("turn_on"), "turnOn");
    }

    #[test]
    fn phase_display_matches_prefix() {
        assert_eq!(Phase::Before.to_string(), "before");
        assert_eq!(Phase::On.to_string(), "on");
        assert_eq!(Phase::After.to_string(), "after");
    }
}
