//! Tracing subscriber setup for the binary

use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::{LOG_ENV_VAR, LogConfig, log_path};

/// Filter used when `OOBMIGRATION_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// The returned guard flushes the log file on drop and must be held until exit.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (writer, guard) = if config.file {
        let path = log_path();
        let (dir, file_name) = split_log_path(&path)?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {:?}", dir))?;
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        (BoxMakeWriter::new(non_blocking), Some(guard))
    } else {
        (BoxMakeWriter::new(std::io::stderr), None)
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(!config.file);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow!(e))?;

    Ok(guard)
}

/// Directory and file name the appender writes to
fn split_log_path(path: &Path) -> anyhow::Result<(&Path, &OsStr)> {
    match (path.parent(), path.file_name()) {
        (Some(dir), Some(file_name)) => Ok((dir, file_name)),
        _ => Err(anyhow!("Invalid log path {:?}", path)),
    }
}
