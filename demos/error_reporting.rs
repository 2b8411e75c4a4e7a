//! Error reporting example
//!
//! Demonstrates the bootstrap helper, implicit error sections, verbose
//! dumps, and the background drain for errors raised away from any caller.
//!
//! Run with: cargo run --example error_reporting

use rust_log_pipeline::prelude::*;
use rust_log_pipeline::setup::{self, Config};
use rust_log_pipeline::{attrs, crit, error, report};
use std::io::{self, Write};

#[derive(Debug)]
#[allow(dead_code)]
struct MyStruct {
    field_a: i32,
    field_b: String,
    field_c: f64,
}

fn main() -> Result<()> {
    println!("=== Rust Log Pipeline - Error Reporting Example ===\n");

    let name = setup::app_logger_name("localhost", "error-demo")?;
    let config = Config {
        color: true,
        time_format: TimeFormat::Musec,
        level: LogLevel::Debug,
        ..Config::default()
    };
    let root = setup::init(&name, &config)?;

    println!("1. Plain and infrastructure errors:");
    let err = io::Error::other("sample error");
    root.debug("Debug with error", attrs![io::Error::other("sample error")])?;
    error!(root, "Simple error"; err, "key1", 123)?;
    let infra = InfrastructureError::new("I can't handle this setup");
    root.error("Here we have an infrastructure error", attrs![infra])?;

    println!("\n2. Verbose dumps:");
    let v = MyStruct {
        field_a: 123,
        field_b: "river".to_string(),
        field_c: 2.5,
    };
    crit!(root, "And now Critical goes"; Value::dump(v), io::Error::other("this is error 1"))?;

    println!("\n3. Errors reported by a background component:");
    let (tx, rx) = crossbeam_channel::unbounded::<io::Error>();
    let drain = report::drain_errors(rx, root.child(attrs!["component", "uploader"]))?;
    tx.send(io::Error::new(io::ErrorKind::TimedOut, "post timed out"))
        .map_err(|e| LoggerError::other(e.to_string()))?;
    drop(tx);
    drain
        .join()
        .map_err(|_| LoggerError::other("error drain panicked"))?;

    println!("\n4. Third-party output through an io::Write adapter:");
    let mut legacy = LogWriter::new(root.clone(), LogLevel::Info);
    legacy.write_all(b"legacy component says hello\n")?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
