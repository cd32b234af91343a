//! Log file setup
//!
//! The terminal belongs to the browser, so events go to a file only. The
//! filter comes from `COURSECAT_LOG` and defaults to `coursecat=info`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "COURSECAT_LOG";

const DEFAULT_DIRECTIVE: &str = "coursecat=info";
const LOG_FILE_NAME: &str = "coursecat.log";

/// Default log file location under the user's local data directory
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("coursecat").join(LOG_FILE_NAME))
}

/// Build the event filter from the environment, falling back to the default
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber writing to `path`
///
/// The returned guard flushes pending events when dropped and must be held
/// for as long as logging is wanted.
///
/// # Errors
///
/// Returns an I/O error if the log directory cannot be created.
pub fn init(path: &Path) -> io::Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .map_or_else(|| LOG_FILE_NAME.into(), ToOwned::to_owned);
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer().with_ansi(false).with_writer(writer);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init();

    Ok(guard)
}
