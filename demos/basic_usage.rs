//! Basic logger usage example
//!
//! Demonstrates the terminal format, levels, child loggers and implicit
//! attributes.
//!
//! Run with: cargo run --example basic_usage

use rust_log_pipeline::prelude::*;
use rust_log_pipeline::{attrs, info, warn};
use std::io;

fn main() -> Result<()> {
    println!("=== Rust Log Pipeline - Basic Usage Example ===\n");

    // Terminal output on stderr, every level, caller file and function
    let handler = LevelFilterHandler::new(
        LogLevel::Trace,
        CallerFuncHandler::new(CallerFileHandler::new(
            SyncHandler::new(StreamHandler::new(
                io::stderr(),
                TerminalFormat::new()
                    .with_color(true)
                    .with_time_format(TimeFormat::Sec)
                    .with_name("myapp"),
            )),
            true,
        )),
    );
    let logger = Logger::with_handler(handler);

    println!("1. Logging at different levels:");
    for level in LogLevel::ALL {
        logger.log(level, "page accessed", attrs!["path", "/a/bbb/c"])?;
    }

    println!("\n2. Child loggers carry context:");
    let requests = logger.child(attrs!["component", "http"]);
    info!(requests, "Request served in {}ms", 12; "status", 200)?;

    println!("\n3. Standalone values and errors:");
    requests.info(
        "I'm the message",
        attrs!["value", 3, "dog", 4, Value::standalone("t1", 12), Value::standalone("t2", 13)],
    )?;
    let err = io::Error::other("sample error");
    warn!(requests, "Simple error"; err, "key1", 123)?;

    println!("\n4. Level filtering:");
    let quiet = Logger::with_handler(LevelFilterHandler::new(LogLevel::Info, logger.handler()));
    quiet.debug("Debug message (hidden)", Vec::new())?;
    quiet.info("Info message (visible)", Vec::new())?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
