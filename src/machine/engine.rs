//! The transition engine.

use crate::core::{
    convention_name, FsmError, FsmResult, Phase, Registry, Transition, TransitionContext,
};
use crate::hooks::{Action, Guard, HookProvider, HookRef, HookTable, MethodTable};
use crate::log::Logger;

use super::config::MachineConfig;

/// What a single `fire` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FireOutcome {
    /// The event is not registered; nothing ran.
    UnknownEvent,
    /// No transition leaves the current state on this event. Guards ran.
    NoTransition,
    /// A transition matched but a guard returned false.
    Blocked,
    /// The machine moved along this transition.
    Committed(Transition),
}

impl FireOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// A dynamically extensible state machine over named states and events.
///
/// The machine owns the application data `T` its hooks work on. Hooks get
/// `&mut T` plus the current `TransitionContext`; they cannot reach the
/// machine itself, so a hook cannot fire another event mid-transition.
///
/// Every call that receives bad input (unknown events, duplicate or
/// reserved transitions, a second seed, unresolvable hook names) is a
/// silent no-op. The `try_*` variants report what went wrong instead.
///
/// # Example
///
/// ```rust
/// use safe_fsm::StateMachine;
/// use safe_fsm::core::TransitionContext;
///
/// struct Water {
///     temperature: i32,
/// }
///
/// let mut machine = StateMachine::new(Water { temperature: 130 });
/// machine.define_transition("freeze", "LIQUID", "SOLID");
/// machine.define_transition("condense", "GAS", "LIQUID");
/// machine.before("condense", |w: &mut Water, _: &TransitionContext| w.temperature < 120);
///
/// machine.set_initial("GAS");
/// machine.fire("condense");
/// assert_eq!(machine.current_state(), Some("GAS"));
///
/// machine.data_mut().temperature = 100;
/// machine.fire("condense");
/// machine.fire("freeze");
/// assert_eq!(machine.current_state(), Some("SOLID"));
/// ```
pub struct StateMachine<T: 'static, P: HookProvider<T> = MethodTable<T>> {
    registry: Registry,
    hooks: HookTable<T>,
    provider: P,
    current: Option<String>,
    context: TransitionContext,
    data: T,
    config: MachineConfig,
    logger: Option<Logger>,
}

impl<T: 'static> StateMachine<T> {
    /// Machine with an empty `MethodTable` as its convention-hook provider.
    pub fn new(data: T) -> Self {
        Self::with_provider(data, MethodTable::new())
    }

    /// Define a named guard method. Named `before<Event>`, it runs
    /// automatically as that event's convention guard.
    pub fn define_guard<F>(&mut self, name: impl Into<String>, guard: F) -> &mut Self
    where
        F: Fn(&mut T, &TransitionContext) -> bool + Send + Sync + 'static,
    {
        self.provider.define_guard(name, guard);
        self
    }

    /// Define a named action method (`on<Event>` / `after<Event>` run
    /// automatically).
    pub fn define_action<F>(&mut self, name: impl Into<String>, action: F) -> &mut Self
    where
        F: Fn(&mut T, &TransitionContext) + Send + Sync + 'static,
    {
        self.provider.define_action(name, action);
        self
    }
}

impl<T: 'static, P: HookProvider<T>> StateMachine<T, P> {
    pub fn with_provider(data: T, provider: P) -> Self {
        Self {
            registry: Registry::new(),
            hooks: HookTable::new(),
            provider,
            current: None,
            context: TransitionContext::default(),
            data,
            config: MachineConfig::default(),
            logger: None,
        }
    }

    pub fn with_config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a logger used for transition traces.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    // Registry

    /// Register `event: from -> to`. Invalid or duplicate registrations
    /// are ignored. A successful registration also installs the event's
    /// shortcut (see `invoke`).
    pub fn define_transition(&mut self, event: &str, from: &str, to: &str) {
        self.registry.define_transition(event, from, to);
    }

    pub fn try_define_transition(&mut self, event: &str, from: &str, to: &str) -> FsmResult<()> {
        self.registry.try_define_transition(event, from, to)
    }

    pub fn list_states(&self) -> Vec<&str> {
        self.registry.list_states()
    }

    pub fn list_events(&self) -> Vec<&str> {
        self.registry.list_events()
    }

    // Current state

    /// Seed the machine. Only the first seed to a registered state takes
    /// effect; anything else is ignored. Never reports the new state.
    pub fn set_initial(&mut self, state: &str) {
        if let Err(error) = self.try_set_initial(state) {
            tracing::debug!(%error, state, "initial state ignored");
        }
    }

    pub fn try_set_initial(&mut self, state: &str) -> FsmResult<()> {
        if let Some(current) = &self.current {
            return Err(FsmError::AlreadySeeded {
                current: current.clone(),
            });
        }
        if !self.registry.has_state(state) {
            return Err(FsmError::UnknownState {
                state: state.to_string(),
            });
        }

        self.current = Some(state.to_string());
        Ok(())
    }

    pub fn current_state(&self) -> Option<&str> {
        self.current.as_deref()
    }

    // Transition context

    pub fn context(&self) -> &TransitionContext {
        &self.context
    }

    pub fn transition_name(&self) -> Option<&str> {
        self.context.transition_name()
    }

    pub fn from_state(&self) -> Option<&str> {
        self.context.from_state()
    }

    pub fn to_state(&self) -> Option<&str> {
        self.context.to_state()
    }

    pub fn next_state(&self) -> Option<&str> {
        self.context.next_state()
    }

    // Hook registration

    /// Add a guard for `event`, given directly or by method name.
    pub fn register_before(&mut self, event: &str, hook: impl Into<HookRef<Guard<T>>>) {
        if let Err(error) = self.try_register_before(event, hook) {
            tracing::debug!(%error, event, "before hook ignored");
        }
    }

    pub fn register_on(&mut self, event: &str, hook: impl Into<HookRef<Action<T>>>) {
        if let Err(error) = self.try_register_on(event, hook) {
            tracing::debug!(%error, event, "on hook ignored");
        }
    }

    pub fn register_after(&mut self, event: &str, hook: impl Into<HookRef<Action<T>>>) {
        if let Err(error) = self.try_register_after(event, hook) {
            tracing::debug!(%error, event, "after hook ignored");
        }
    }

    /// Naming the event's own convention method succeeds without adding
    /// anything, since that method already runs on its own.
    pub fn try_register_before(
        &mut self,
        event: &str,
        hook: impl Into<HookRef<Guard<T>>>,
    ) -> FsmResult<()> {
        let guard = match hook.into() {
            HookRef::Direct(guard) => guard,
            HookRef::Named(name) => {
                if name == convention_name(Phase::Before, event) {
                    return Ok(());
                }
                self.provider
                    .resolve(&name)
                    .and_then(|method| method.as_guard())
                    .ok_or(FsmError::UnresolvedHookName { name })?
            }
        };

        self.hooks.add_before(event, guard);
        Ok(())
    }

    pub fn try_register_on(
        &mut self,
        event: &str,
        hook: impl Into<HookRef<Action<T>>>,
    ) -> FsmResult<()> {
        if let Some(action) = self.resolve_action(Phase::On, event, hook.into())? {
            self.hooks.add_on(event, action);
        }
        Ok(())
    }

    pub fn try_register_after(
        &mut self,
        event: &str,
        hook: impl Into<HookRef<Action<T>>>,
    ) -> FsmResult<()> {
        if let Some(action) = self.resolve_action(Phase::After, event, hook.into())? {
            self.hooks.add_after(event, action);
        }
        Ok(())
    }

    fn resolve_action(
        &self,
        phase: Phase,
        event: &str,
        hook: HookRef<Action<T>>,
    ) -> FsmResult<Option<Action<T>>> {
        match hook {
            HookRef::Direct(action) => Ok(Some(action)),
            HookRef::Named(name) if name == convention_name(phase, event) => Ok(None),
            HookRef::Named(name) => match self.provider.resolve(&name) {
                Some(method) => Ok(Some(method.as_action())),
                None => Err(FsmError::UnresolvedHookName { name }),
            },
        }
    }

    /// Add a guard closure for `event`.
    pub fn before<F>(&mut self, event: &str, guard: F) -> &mut Self
    where
        F: Fn(&mut T, &TransitionContext) -> bool + Send + Sync + 'static,
    {
        self.hooks.add_before(event, Guard::new(guard));
        self
    }

    /// Add an on-hook closure for `event`.
    pub fn on<F>(&mut self, event: &str, action: F) -> &mut Self
    where
        F: Fn(&mut T, &TransitionContext) + Send + Sync + 'static,
    {
        self.hooks.add_on(event, Action::new(action));
        self
    }

    /// Add an after-hook closure for `event`.
    pub fn after<F>(&mut self, event: &str, action: F) -> &mut Self
    where
        F: Fn(&mut T, &TransitionContext) + Send + Sync + 'static,
    {
        self.hooks.add_after(event, Action::new(action));
        self
    }

    // Firing

    /// Fire `event`. Failure of any kind leaves the state untouched and is
    /// only visible through `current_state` and hook side effects.
    pub fn fire(&mut self, event: &str) {
        self.fire_outcome(event);
    }

    /// Fire the event whose shortcut is `shortcut` (the event name in
    /// lower camel case). Unknown shortcuts are ignored.
    pub fn invoke(&mut self, shortcut: &str) {
        let event = self.registry.shortcut(shortcut).map(str::to_string);
        match event {
            Some(event) => self.fire(&event),
            None => tracing::debug!(shortcut, "unknown shortcut ignored"),
        }
    }

    /// Fire `event`, reporting anything short of a commit as an error.
    pub fn try_fire(&mut self, event: &str) -> FsmResult<Transition> {
        let from = self.current.clone();
        match self.fire_outcome(event) {
            FireOutcome::Committed(transition) => Ok(transition),
            FireOutcome::UnknownEvent => Err(FsmError::UnknownEvent {
                event: event.to_string(),
            }),
            FireOutcome::NoTransition => Err(FsmError::NoTransition {
                event: event.to_string(),
                from,
            }),
            FireOutcome::Blocked => Err(FsmError::GuardBlocked {
                event: event.to_string(),
                from,
            }),
        }
    }

    /// Fire `event` and report what happened.
    ///
    /// Guards always run once the event is known, even when no transition
    /// leaves the current state. Within each phase the convention hook runs
    /// before the registered hooks. The context is cleared on the way out.
    pub fn fire_outcome(&mut self, event: &str) -> FireOutcome {
        if !self.registry.has_event(event) {
            tracing::debug!(event, "unknown event ignored");
            return FireOutcome::UnknownEvent;
        }

        let transition = self
            .registry
            .find(event, self.current.as_deref())
            .cloned();
        self.context.begin(
            event,
            self.current.as_deref(),
            transition.as_ref().map(|t| t.to.as_str()),
        );

        let allowed = self.run_guards(event);

        let outcome = match transition {
            None => {
                tracing::debug!(event, from = ?self.current, "no transition from current state");
                FireOutcome::NoTransition
            }
            Some(_) if !allowed => {
                tracing::debug!(event, from = ?self.current, "transition blocked by guard");
                FireOutcome::Blocked
            }
            Some(transition) => self.commit(event, transition),
        };

        self.context.clear();
        outcome
    }

    /// Every guard runs, even after one has said no.
    fn run_guards(&mut self, event: &str) -> bool {
        let mut allowed = match self.provider.before_hook(event) {
            Some(guard) => guard.check(&mut self.data, &self.context),
            None => true,
        };
        for guard in self.hooks.before(event) {
            allowed &= guard.check(&mut self.data, &self.context);
        }
        allowed
    }

    fn commit(&mut self, event: &str, transition: Transition) -> FireOutcome {
        self.context.next_state = Some(transition.to.clone());
        if let Some(action) = self.provider.on_hook(event) {
            action.run(&mut self.data, &self.context);
        }
        for action in self.hooks.on(event) {
            action.run(&mut self.data, &self.context);
        }

        self.current = Some(transition.to.clone());
        self.context.next_state = None;
        self.trace(event, &transition);

        if let Some(action) = self.provider.after_hook(event) {
            action.run(&mut self.data, &self.context);
        }
        for action in self.hooks.after(event) {
            action.run(&mut self.data, &self.context);
        }

        FireOutcome::Committed(transition)
    }

    fn trace(&self, event: &str, transition: &Transition) {
        tracing::trace!(
            event,
            from = %transition.from,
            to = %transition.to,
            "transition committed"
        );

        if !self.config.trace_transitions {
            return;
        }
        if let Some(logger) = &self.logger {
            logger.transition(
                event,
                self.config.label.as_deref(),
                &transition.from,
                &transition.to,
            );
        }
    }
}
