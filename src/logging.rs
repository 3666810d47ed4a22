use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

pub const LOG_FILE: &str = "advanced-navigation.log";

/// Sends `tracing` output to a daily log file under `dir` (never stdout, the
/// host owns the terminal). Keep the guard alive until shutdown so buffered
/// lines are flushed.
pub fn init(dir: &Path, filter: &str) -> Result<WorkerGuard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(dir)?);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(env_filter(filter))
        .init();

    Ok(guard)
}

/// Daily-rolling `advanced-navigation.log.<date>` files under `dir`.
fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    fs::create_dir_all(dir)?;
    Ok(tracing_appender::rolling::daily(dir, LOG_FILE))
}

fn env_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?}: {err}");
        EnvFilter::new("advanced_navigation=info")
    })
}
