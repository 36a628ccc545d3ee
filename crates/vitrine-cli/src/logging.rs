//! Tracing setup.
//!
//! One-shot commands log to stderr; the full-screen TUI logs to a daily
//! file under ${VITRINE_HOME}/logs so diagnostics never corrupt the
//! alternate screen. Filtering follows the VITRINE_LOG env var.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "VITRINE_LOG";
const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initializes stderr logging for one-shot commands.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Initializes file logging for the TUI.
///
/// The returned guard must be held for the lifetime of the program;
/// dropping it flushes and stops the background writer.
pub fn init_file() -> WorkerGuard {
    let logs_dir = vitrine_core::config::paths::logs_dir();
    let appender = tracing_appender::rolling::daily(logs_dir, "vitrine.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
