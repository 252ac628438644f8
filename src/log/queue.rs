//! Serialized, append-only log sink.
//!
//! `emit` pushes a finished line onto a FIFO and returns. A single drain
//! pops lines in order and appends each to the sink file. The writing
//! flag lives under the same lock as the FIFO, so a drain is started
//! exactly when the queue goes from idle to busy and at most one drain
//! runs per queue.
//!
//! Lines still queued when the process exits are lost.

use super::error::SinkError;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Default)]
struct Pending {
    lines: VecDeque<String>,
    writing: bool,
}

struct Shared {
    path: PathBuf,
    capacity: Option<usize>,
    pending: Mutex<Pending>,
    idle: watch::Sender<bool>,
    written: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
}

/// FIFO of formatted lines drained into a file.
///
/// Cloning yields another handle to the same queue.
///
/// # Example
///
/// ```rust,no_run
/// use safe_fsm::log::LogQueue;
///
/// # async fn demo() {
/// let queue = LogQueue::new("/tmp/water.log");
/// queue.emit("first".to_string());
/// queue.emit("second".to_string());
/// queue.wait_idle().await;
/// # }
/// ```
#[derive(Clone)]
pub struct LogQueue {
    shared: Arc<Shared>,
}

impl LogQueue {
    /// Unbounded queue appending to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_capacity(path, None)
    }

    /// Queue that keeps at most `capacity` pending lines, dropping the
    /// oldest when full. `None` means unbounded.
    pub fn with_capacity(path: impl Into<PathBuf>, capacity: Option<usize>) -> Self {
        let (idle, _) = watch::channel(true);
        Self {
            shared: Arc::new(Shared {
                path: path.into(),
                capacity: capacity.filter(|c| *c > 0),
                pending: Mutex::new(Pending::default()),
                idle,
                written: AtomicU64::new(0),
                failed: AtomicU64::new(0),
                dropped: AtomicU64::new(0),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.shared.path
    }

    /// Enqueue `line` and start a drain if none is running. Never waits
    /// on the sink.
    pub fn emit(&self, line: String) {
        let start_drain = {
            let mut pending = self.shared.pending.lock();
            if let Some(capacity) = self.shared.capacity {
                while pending.lines.len() >= capacity {
                    pending.lines.pop_front();
                    self.shared.dropped.fetch_add(1, Ordering::Relaxed);
                    tracing::warn!(
                        path = %self.shared.path.display(),
                        capacity,
                        "log queue full, dropping oldest line"
                    );
                }
            }
            pending.lines.push_back(line);

            if pending.writing {
                false
            } else {
                pending.writing = true;
                self.shared.idle.send_replace(false);
                true
            }
        };

        if start_drain {
            spawn_drain(Arc::clone(&self.shared));
        }
    }

    /// Lines waiting to be written.
    pub fn pending(&self) -> usize {
        self.shared.pending.lock().lines.len()
    }

    pub fn is_writing(&self) -> bool {
        self.shared.pending.lock().writing
    }

    pub fn written(&self) -> u64 {
        self.shared.written.load(Ordering::Relaxed)
    }

    pub fn failed_writes(&self) -> u64 {
        self.shared.failed.load(Ordering::Relaxed)
    }

    pub fn dropped(&self) -> u64 {
        self.shared.dropped.load(Ordering::Relaxed)
    }

    /// Resolves once every queued line has been handled and no drain runs.
    pub async fn wait_idle(&self) {
        let mut idle = self.shared.idle.subscribe();
        // the sender lives in `shared`, so the channel cannot close here
        let _ = idle.wait_for(|idle| *idle).await;
    }
}

fn spawn_drain(shared: Arc<Shared>) {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn_blocking(move || drain(&shared));
        }
        Err(_) => {
            std::thread::spawn(move || drain(&shared));
        }
    }
}

fn drain(shared: &Shared) {
    loop {
        let line = {
            let mut pending = shared.pending.lock();
            match pending.lines.pop_front() {
                Some(line) => line,
                None => {
                    pending.writing = false;
                    shared.idle.send_replace(true);
                    return;
                }
            }
        };

        match append(&shared.path, &line) {
            Ok(()) => {
                shared.written.fetch_add(1, Ordering::Relaxed);
            }
            Err(error) => {
                shared.failed.fetch_add(1, Ordering::Relaxed);
                tracing::error!(%error, "log line dropped");
            }
        }
    }
}

fn append(path: &Path, line: &str) -> Result<(), SinkError> {
    let to_sink = |source| SinkError::Append {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_sink)?;
    writeln!(file, "{line}").map_err(to_sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap_or_default()
    }

    #[tokio::test]
    async fn drains_in_submission_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fsm.log");
        let queue = LogQueue::new(&path);

        for i in 0..50 {
            queue.emit(format!("line {i}"));
        }
        queue.wait_idle().await;

        let expected: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
        let contents = read(&path);
        let written: Vec<&str> = contents.lines().collect();
        assert_eq!(written, expected);
        assert_eq!(queue.written(), 50);
        assert!(!queue.is_writing());
    }

    #[test]
    fn drains_without_a_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fsm.log");
        let queue = LogQueue::new(&path);

        queue.emit("a".to_string());
        queue.emit("b".to_string());

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime.block_on(queue.wait_idle());

        assert_eq!(read(&path), "a\nb\n");
    }

    #[tokio::test]
    async fn failed_append_is_counted_and_drain_continues() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be opened for appending
        let queue = LogQueue::new(dir.path());

        queue.emit("lost".to_string());
        queue.emit("also lost".to_string());
        queue.wait_idle().await;

        assert_eq!(queue.failed_writes(), 2);
        assert_eq!(queue.written(), 0);
        assert_eq!(queue.pending(), 0);
    }

    #[tokio::test]
    async fn capacity_drops_oldest_pending_line() {
        let dir = tempfile::tempdir().unwrap();
        let queue = LogQueue::with_capacity(dir.path().join("fsm.log"), Some(1));

        // mark a drain as busy so emit does not start one
        {
            let mut pending = queue.shared.pending.lock();
            pending.writing = true;
            pending.lines.push_back("held".to_string());
        }
        queue.emit("newest".to_string());

        assert_eq!(queue.dropped(), 1);
        assert_eq!(queue.pending(), 1);
        assert_eq!(
            queue.shared.pending.lock().lines.front().map(String::as_str),
            Some("newest")
        );
    }

    #[tokio::test]
    async fn idle_queue_resolves_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let queue = LogQueue::new(dir.path().join("never.log"));

        queue.wait_idle().await;
        assert!(!dir.path().join("never.log").exists());
    }
}
