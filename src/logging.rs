//! Tracing setup for the automation binaries
//!
//! Every run logs timestamped lines to stdout and to a per-run log file
//! named `{prefix}_{YYYYmmdd_HHMMSS}.log` in the working directory.

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with stdout and file layers.
///
/// Returns the file writer guard; the caller must hold it for the process
/// lifetime or buffered log lines are dropped on exit.
pub fn init(prefix: &str, debug: bool) -> WorkerGuard {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_name = format!("{}_{}.log", prefix, Local::now().format("%Y%m%d_%H%M%S"));
    let (file_writer, guard) = tracing_appender::non_blocking(
        tracing_appender::rolling::never(".", file_name),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339()),
        )
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339()),
        )
        .init();

    guard
}
