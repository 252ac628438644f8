//! Leveled, timestamped logging facade.
//!
//! A `Logger` formats lines as
//! `<timestamp> <App>(v<major>.<minor>.<patch>) [<tag>]: ` followed by the
//! indented message, and emits them either straight to stdout (colored by
//! default) or, once a sink path is set, through a `LogQueue` that appends
//! them to a file in order. Setting a sink path turns color off for good.
//!
//! The logger is independent of the state machine. A machine that should
//! trace its transitions holds a clone of one.

mod app;
mod config;
mod error;
mod format;
mod queue;

pub use app::AppInfo;
pub use config::LoggerConfig;
pub use error::SinkError;
pub use format::{format_line, timestamp, transition_message, Palette, Severity};
pub use queue::LogQueue;

use chrono::Utc;
use parking_lot::RwLock;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
enum Output {
    Console { color: bool },
    Queue(LogQueue),
}

struct Inner {
    app: AppInfo,
    capacity: Option<usize>,
    output: RwLock<Output>,
}

/// Cloneable handle to a logging facade.
///
/// # Example
///
/// ```rust
/// use safe_fsm::log::{AppInfo, Logger};
///
/// let logger = Logger::new(AppInfo::new("Ada", "Water", "1", "0", "0"));
/// logger.info(Some("boot"), "ready");
/// logger.warn(None, "temperature rising\nstill liquid");
/// ```
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

impl Logger {
    /// Console logger with color.
    pub fn new(app: AppInfo) -> Self {
        Self::from_config(LoggerConfig::new(app))
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        let output = match config.sink_path {
            Some(path) => Output::Queue(LogQueue::with_capacity(path, config.queue_capacity)),
            None => Output::Console {
                color: config.color,
            },
        };

        Self {
            inner: Arc::new(Inner {
                app: config.app,
                capacity: config.queue_capacity,
                output: RwLock::new(output),
            }),
        }
    }

    pub fn app(&self) -> &AppInfo {
        &self.inner.app
    }

    /// Switch to queued file output at `path`. Color stays off from now on,
    /// even if the sink path is changed again later.
    pub fn set_sink_path(&self, path: impl Into<PathBuf>) {
        let queue = LogQueue::with_capacity(path, self.inner.capacity);
        tracing::debug!(path = %queue.path().display(), "log sink configured");
        *self.inner.output.write() = Output::Queue(queue);
    }

    pub fn color(&self) -> bool {
        matches!(*self.inner.output.read(), Output::Console { color: true })
    }

    /// Queue behind the file sink, if one is configured.
    pub fn queue(&self) -> Option<LogQueue> {
        match &*self.inner.output.read() {
            Output::Queue(queue) => Some(queue.clone()),
            Output::Console { .. } => None,
        }
    }

    /// Write one finished line to the current output.
    pub fn emit(&self, line: String) {
        let output = self.inner.output.read().clone();
        match output {
            Output::Queue(queue) => queue.emit(line),
            Output::Console { .. } => {
                write_console(&mut std::io::stdout().lock(), &line);
            }
        }
    }

    pub fn log(&self, severity: Severity, tag: Option<&str>, message: &str) {
        let line = format_line(
            &self.inner.app,
            severity,
            tag,
            message,
            self.color(),
            Utc::now(),
        );
        self.emit(line);
    }

    pub fn info(&self, tag: Option<&str>, message: &str) {
        self.log(Severity::Info, tag, message);
    }

    pub fn warn(&self, tag: Option<&str>, message: &str) {
        self.log(Severity::Warn, tag, message);
    }

    pub fn error(&self, tag: Option<&str>, message: &str) {
        self.log(Severity::Error, tag, message);
    }

    /// Log the application banner (`<name> v<version> by <author>`).
    pub fn announce(&self) {
        self.info(None, &self.inner.app.banner());
    }

    /// Log a committed transition at info level.
    pub fn transition(&self, event: &str, label: Option<&str>, from: &str, to: &str) {
        self.info(None, &transition_message(event, label, from, to));
    }

    /// Wait until the file sink has caught up. Returns at once for
    /// console output.
    pub async fn flush(&self) {
        if let Some(queue) = self.queue() {
            queue.wait_idle().await;
        }
    }
}

/// Write `line` to the console, reporting a failed write on the tracing
/// side channel. Returns whether the line was written.
fn write_console(out: &mut impl Write, line: &str) -> bool {
    match writeln!(out, "{line}").and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(error) => {
            tracing::error!(%error, "console log line dropped");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn console_write_failure_is_reported_not_raised() {
        assert!(!write_console(&mut ClosedPipe, "lost"));

        let mut buffer = Vec::new();
        assert!(write_console(&mut buffer, "kept"));
        assert_eq!(buffer, b"kept\n");
    }

    fn app() -> AppInfo {
        AppInfo::new("Ada", "Water", "2", "1", "0")
    }

    #[test]
    fn console_logger_is_colored_by_default() {
        let logger = Logger::new(app());
        assert!(logger.color());
        assert!(logger.queue().is_none());
    }

    #[test]
    fn color_can_be_disabled_by_config() {
        let logger = Logger::from_config(LoggerConfig {
            color: false,
            ..LoggerConfig::new(app())
        });
        assert!(!logger.color());
    }

    #[tokio::test]
    async fn sink_path_disables_color_and_queues_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water.log");
        let logger = Logger::new(app());

        logger.set_sink_path(&path);
        assert!(!logger.color());

        logger.info(Some("db"), "connected");
        logger.error(None, "boiling\nover");
        logger.flush().await;

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with(" Water(v2.1.0) [db]: "));
        assert_eq!(lines[1], "  connected");
        assert!(lines[2].ends_with(" Water(v2.1.0) []: "));
        assert_eq!(&lines[3..], &["  boiling", "  over"]);
        assert!(!contents.contains('\x1b'));
    }

    #[tokio::test]
    async fn clones_share_the_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.log");
        let logger = Logger::new(app());
        let clone = logger.clone();

        logger.set_sink_path(&path);
        clone.announce();
        clone.flush().await;

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("  Water v2.1.0 by Ada"));
    }

    #[tokio::test]
    async fn configured_sink_starts_without_color() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::from_config(LoggerConfig {
            sink_path: Some(dir.path().join("boot.log")),
            ..LoggerConfig::new(app())
        });

        assert!(!logger.color());
        logger.transition("freeze", Some("Water"), "LIQUID", "SOLID");
        logger.flush().await;

        let contents = std::fs::read_to_string(dir.path().join("boot.log")).unwrap();
        assert!(contents.contains("  Transition (freeze in Water) : [LIQUID] -> [SOLID]"));
    }
}
