//! File logging example
//!
//! Demonstrates fanning records out to the terminal and to a JSON file.
//!
//! Run with: cargo run --example file_logging

use rust_log_pipeline::prelude::*;
use rust_log_pipeline::{attrs, registry};
use std::io;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Log Pipeline - File Logging Example ===\n");

    let console: SharedHandler = Arc::new(SyncHandler::new(StreamHandler::new(
        io::stdout(),
        TerminalFormat::new().with_name("files"),
    )));
    let file: SharedHandler = Arc::new(SyncHandler::new(StreamHandler::file(
        "application.log",
        JsonFormat::new(),
    )?));

    // Terminal gets everything from Info up, the file only warnings and worse
    let outputs: Vec<SharedHandler> = vec![
        console,
        Arc::new(LevelFilterHandler::new(LogLevel::Warn, file)),
    ];
    let handler = LevelFilterHandler::new(
        LogLevel::Info,
        CallerFileHandler::new(MultiHandler::new(outputs), true),
    );
    registry::set("files", Logger::with_handler(handler));

    println!("1. Logging to both console and file:");
    let logger = registry::get("files");
    logger.info("Application started", Vec::new())?;
    logger.debug("Loading configuration...", Vec::new())?;
    logger.warn("Using default settings for some options", attrs!["missing", 2])?;
    logger.error(
        "Failed to load optional plugin",
        attrs!["plugin", "metrics", io::Error::other("not found")],
    )?;

    println!("\n2. Loggers fetched by name share the configuration:");
    let db = registry::get("files").child(attrs!["module", "db"]);
    db.info("Database connection established", attrs!["pool", 8])?;

    println!("\nWarnings and errors were written to application.log");
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
