//! Tests for queued file logging.

use safe_fsm::log::{AppInfo, LogQueue, Logger, LoggerConfig};

#[tokio::test]
async fn rapid_emits_land_in_submission_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sink.log");
    let queue = LogQueue::new(&path);

    queue.emit("first".to_string());
    queue.emit("second".to_string());
    queue.emit("third".to_string());
    queue.wait_idle().await;

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "first\nsecond\nthird\n"
    );
}

#[tokio::test]
async fn emits_from_many_tasks_are_not_interleaved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.log");
    let queue = LogQueue::new(&path);

    let mut handles = Vec::new();
    for task in 0..8 {
        let queue = queue.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..25 {
                queue.emit(format!("task {task} line {i} {}", "x".repeat(64)));
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    queue.wait_idle().await;

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 200);
    for task in 0..8 {
        let prefix = format!("task {task} ");
        let order: Vec<usize> = lines
            .iter()
            .filter(|line| line.starts_with(&prefix))
            .map(|line| line.split(' ').nth(3).unwrap().parse().unwrap())
            .collect();
        assert_eq!(order, (0..25).collect::<Vec<_>>());
    }
}

#[tokio::test]
async fn unwritable_sink_does_not_reach_the_caller() {
    let dir = tempfile::tempdir().unwrap();
    let logger = Logger::from_config(LoggerConfig {
        sink_path: Some(dir.path().join("missing").join("sink.log")),
        ..LoggerConfig::new(AppInfo::default())
    });

    logger.info(None, "nowhere to go");
    logger.warn(Some("disk"), "still nowhere");
    logger.flush().await;

    let queue = logger.queue().unwrap();
    assert_eq!(queue.failed_writes(), 2);
    assert_eq!(queue.pending(), 0);
}

#[tokio::test]
async fn logger_lines_keep_their_layout_in_the_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.log");
    let logger = Logger::new(AppInfo::new("Ada", "Water", "0", "9", "1"));
    logger.set_sink_path(&path);

    logger.info(Some("phase"), "one");
    logger.info(Some("phase"), "two");
    logger.info(Some("phase"), "three");
    logger.flush().await;

    let contents = std::fs::read_to_string(&path).unwrap();
    let bodies: Vec<&str> = contents
        .lines()
        .filter(|line| line.starts_with("  "))
        .collect();
    assert_eq!(bodies, vec!["  one", "  two", "  three"]);
    assert_eq!(
        contents
            .lines()
            .filter(|line| line.ends_with(" Water(v0.9.1) [phase]: "))
            .count(),
        3
    );
}
