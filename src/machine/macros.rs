//! Macros for declaring transition tables.

/// Register a table of `event: FROM => TO` transitions.
///
/// Works on anything with a `define_transition(&str, &str, &str)` method,
/// i.e. a `StateMachine` or a bare `Registry`. Entries are registered in
/// order with the usual silent rules, so a later duplicate loses.
///
/// # Example
///
/// ```
/// use safe_fsm::{transitions, StateMachine};
///
/// let mut machine = StateMachine::new(());
/// transitions!(machine, {
///     freeze: LIQUID => SOLID,
///     condense: GAS => LIQUID,
///     melt: SOLID => LIQUID,
/// });
///
/// assert_eq!(machine.list_events(), vec!["condense", "freeze", "melt"]);
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $machine:expr, {
            $(
                $event:ident : $from:ident => $to:ident
            ),* $(,)?
        }
    ) => {{
        let target = &mut $machine;
        $(
            target.define_transition(
                stringify!($event),
                stringify!($from),
                stringify!($to),
            );
        )*
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::Registry;

    #[test]
    fn transitions_macro_fills_a_registry() {
        let mut registry = Registry::new();
        transitions!(registry, {
            freeze: LIQUID => SOLID,
            condense: GAS => LIQUID,
        });

        assert_eq!(registry.list_states(), vec!["GAS", "LIQUID", "SOLID"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn transitions_macro_applies_silent_rules() {
        let mut registry = Registry::new();
        transitions!(registry, {
            freeze: LIQUID => SOLID,
            default: A => B,
            solidify: LIQUID => SOLID,
        });

        assert_eq!(registry.list_events(), vec!["freeze"]);
    }

    #[test]
    fn empty_table_is_allowed() {
        let mut registry = Registry::new();
        transitions!(registry, {});
        assert!(registry.is_empty());
    }
}
