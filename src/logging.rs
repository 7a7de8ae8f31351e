//! Logging utilities for cmapio.
//!
//! This module provides subscriber setup and structured logging helpers so
//! that loads, conversions and exports can be traced and timed.

use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::colormaps::ColorTable;

/// Initialize the tracing subscriber with the given log level
///
/// `RUST_LOG`, when set, takes precedence over `log_level`. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    if let Some(details) = details {
        info!(
            operation = operation,
            details = details,
            "Starting operation"
        );
    } else {
        info!(operation = operation, "Starting operation");
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation failed"
        );
    }
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let operation_id = generate_operation_id();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        "Starting operation"
    );

    let result = f();

    info!(
        operation = operation,
        operation_id = %operation_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log the shape of a loaded or transformed table
pub fn log_table_stats(source: &str, table: &ColorTable) {
    info!(
        source = source,
        colormap = table.name(),
        kind = if table.is_listed() { "listed" } else { "segmented" },
        len = table.len(),
        alpha = table.has_alpha(),
        "Colormap ready"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::CmapError, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}

/// Generate a unique operation ID
pub fn generate_operation_id() -> String {
    Uuid::new_v4().to_string()
}
