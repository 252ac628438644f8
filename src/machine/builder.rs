//! Builder for constructing state machines.

use super::config::MachineConfig;
use super::engine::StateMachine;
use super::error::BuildError;
use crate::core::{Transition, TransitionContext};
use crate::hooks::MethodTable;
use crate::log::Logger;
use stillwater::validation::Validation;

/// Builder for constructing state machines with a fluent API.
///
/// By default the builder is as forgiving as the machine: invalid
/// transitions and a bad initial state are dropped. `strict()` makes
/// `build` validate the whole table first and report every problem.
///
/// # Example
///
/// ```rust
/// use safe_fsm::StateMachineBuilder;
///
/// let machine = StateMachineBuilder::new(())
///     .transition("freeze", "LIQUID", "SOLID")
///     .transition("condense", "GAS", "LIQUID")
///     .initial("GAS")
///     .strict()
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), Some("GAS"));
/// ```
pub struct StateMachineBuilder<T: 'static> {
    data: T,
    transitions: Vec<Transition>,
    initial: Option<String>,
    config: MachineConfig,
    logger: Option<Logger>,
    methods: MethodTable<T>,
    strict: bool,
}

impl<T: 'static> StateMachineBuilder<T> {
    /// Create a new builder around the machine's application data.
    pub fn new(data: T) -> Self {
        Self {
            data,
            transitions: Vec::new(),
            initial: None,
            config: MachineConfig::default(),
            logger: None,
            methods: MethodTable::new(),
            strict: false,
        }
    }

    /// Add a transition.
    pub fn transition(mut self, event: &str, from: &str, to: &str) -> Self {
        self.transitions.push(Transition::new(event, from, to));
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the initial state.
    pub fn initial(mut self, state: &str) -> Self {
        self.initial = Some(state.to_string());
        self
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Define a named guard method.
    pub fn guard_method<F>(mut self, name: &str, guard: F) -> Self
    where
        F: Fn(&mut T, &TransitionContext) -> bool + Send + Sync + 'static,
    {
        self.methods.define_guard(name, guard);
        self
    }

    /// Define a named action method.
    pub fn action_method<F>(mut self, name: &str, action: F) -> Self
    where
        F: Fn(&mut T, &TransitionContext) + Send + Sync + 'static,
    {
        self.methods.define_action(name, action);
        self
    }

    /// Reject invalid transitions and initial states instead of dropping them.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine<T>, BuildError> {
        let mut machine =
            StateMachine::with_provider(self.data, self.methods).with_config(self.config);
        if let Some(logger) = self.logger {
            machine = machine.with_logger(logger);
        }

        if self.strict {
            if let Validation::Failure(errors) = machine.registry().validate(&self.transitions) {
                return Err(BuildError::InvalidTransitions(
                    errors.iter().cloned().collect(),
                ));
            }
        }

        for transition in &self.transitions {
            machine.define_transition(&transition.event, &transition.from, &transition.to);
        }

        if let Some(state) = self.initial {
            if self.strict {
                machine
                    .try_set_initial(&state)
                    .map_err(|_| BuildError::UnknownInitialState {
                        state: state.clone(),
                    })?;
            } else {
                machine.set_initial(&state);
            }
        }

        Ok(machine)
    }
}
