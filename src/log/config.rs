//! Logger configuration.

use super::app::AppInfo;
use super::error::SinkError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings a `Logger` is built from.
///
/// ```rust
/// use safe_fsm::log::LoggerConfig;
///
/// let config = LoggerConfig::from_json(
///     r#"{"app": {"name": "Water", "major": "1"}, "sink_path": "/tmp/water.log"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.app.name, "Water");
/// assert!(config.color);
/// assert_eq!(config.queue_capacity, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub app: AppInfo,
    /// When set, lines are queued and appended to this file instead of
    /// going to stdout. Color is then disabled regardless of `color`.
    pub sink_path: Option<PathBuf>,
    pub color: bool,
    /// Upper bound on pending sink lines. Unbounded when absent.
    pub queue_capacity: Option<usize>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            app: AppInfo::default(),
            sink_path: None,
            color: true,
            queue_capacity: None,
        }
    }
}

impl LoggerConfig {
    pub fn new(app: AppInfo) -> Self {
        Self {
            app,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SinkError> {
        Ok(serde_json::from_str(json)?)
    }
}
