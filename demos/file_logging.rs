//! File Logging
//!
//! This example routes log lines and transition traces into a file sink.
//!
//! Key concepts:
//! - Console output until a sink path is set
//! - Lines appended in submission order by a single writer
//! - Transition traces enabled through `MachineConfig`
//! - Waiting for the queue to drain with `flush`
//!
//! Run with: cargo run --example file_logging

use safe_fsm::log::{AppInfo, Logger};
use safe_fsm::{MachineConfig, StateMachine};

#[tokio::main]
async fn main() {
    println!("=== File Logging Example ===\n");

    let logger = Logger::new(AppInfo::new("Ada", "Water", "1", "0", "0"));
    logger.announce();
    logger.info(Some("boot"), "logging to the console");

    let path = std::env::temp_dir().join("safe-fsm-water.log");
    let _ = std::fs::remove_file(&path);
    logger.set_sink_path(&path);

    logger.info(Some("phase"), "first");
    logger.info(Some("phase"), "second");
    logger.warn(Some("phase"), "third\nspans two lines");

    let mut machine = StateMachine::new(())
        .with_config(MachineConfig::from_env().label("Water").trace_transitions(true))
        .with_logger(logger.clone());
    machine.define_transition("condense", "GAS", "LIQUID");
    machine.define_transition("freeze", "LIQUID", "SOLID");
    machine.set_initial("GAS");
    machine.fire("condense");
    machine.fire("freeze");

    logger.flush().await;

    let contents = std::fs::read_to_string(&path).unwrap();
    println!("Contents of {}:\n", path.display());
    print!("{contents}");

    if let Some(queue) = logger.queue() {
        println!(
            "\nWritten: {}, failed: {}",
            queue.written(),
            queue.failed_writes()
        );
    }

    println!("\n=== Example Complete ===");
}
