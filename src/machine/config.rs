//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Environment variables consulted by `MachineConfig::from_env`.
pub const TRACE_ENV_VARS: [&str; 2] = ["SAFE_FSM_DEBUG", "safe_fsm_debug"];

/// Value of a trace variable that turns transition tracing on.
pub const TRACE_ENV_VALUE: &str = "show";

/// Per-machine settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Name shown as `in <label>` in transition trace lines.
    pub label: Option<String>,
    /// Log every committed transition through the attached logger.
    pub trace_transitions: bool,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn trace_transitions(mut self, trace: bool) -> Self {
        self.trace_transitions = trace;
        self
    }

    /// Default config with tracing taken from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let trace = TRACE_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .any(|value| value.trim().eq_ignore_ascii_case(TRACE_ENV_VALUE));

        Self::default().trace_transitions(trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_is_off_by_default() {
        assert!(!MachineConfig::default().trace_transitions);
        assert!(!MachineConfig::from_lookup(|_| None).trace_transitions);
    }

    #[test]
    fn show_enables_tracing_in_either_spelling() {
        let upper = MachineConfig::from_lookup(|key| {
            (key == "SAFE_FSM_DEBUG").then(|| "SHOW".to_string())
        });
        let lower = MachineConfig::from_lookup(|key| {
            (key == "safe_fsm_debug").then(|| "show".to_string())
        });

        assert!(upper.trace_transitions);
        assert!(lower.trace_transitions);
    }

    #[test]
    fn other_values_do_not_enable_tracing() {
        let config = MachineConfig::from_lookup(|_| Some("1".to_string()));
        assert!(!config.trace_transitions);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: MachineConfig = serde_json::from_str(r#"{"label": "Water"}"#).unwrap();
        assert_eq!(config.label.as_deref(), Some("Water"));
        assert!(!config.trace_transitions);
    }
}
