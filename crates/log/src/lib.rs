//! Logging setup: a non-blocking file writer behind an env-driven filter.
//!
//! The terminal belongs to the game while it runs, so there is no stdout
//! layer; everything goes to a log file.
//!
//! ## Environment Variables
//!
//! 1. **`ROUND_LOG`** (highest priority). A bare level such as `debug` is
//!    applied to every project crate; anything containing `=`, `:` or `,` is
//!    used verbatim as a filter.
//! 2. **`RUST_LOG`**, used verbatim.
//! 3. **Default**: `warn` globally, `info` for the game and its core.
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/tui-round/logs/tui-round-<pid>.log`.
//! Override with `--log-file <path>` or `ROUND_LOG_FILE`. A path with an
//! extension names the file; a path without one names the directory.

use std::{
    env, io,
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
    Registry,
};

const PROJECT_CRATES: &[&str] = &[
    "tui_round",
    "tui_round_core",
    "tui_round_term",
    "tui_round_input",
];

const DEFAULT_DIRECTIVES: &str = "warn,tui_round=info,tui_round_core=info";

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("cannot create log directory {}: {source}", dir.display())]
    CreateDir { dir: PathBuf, source: io::Error },
    #[error("logging already initialised: {0}")]
    Init(#[from] TryInitError),
}

/// Returned from [`init`]; hold it until exit so buffered lines reach the file.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Install the global subscriber.
///
/// Fails if the log directory cannot be created or a global subscriber is
/// already set.
pub fn init(config: LogConfig) -> Result<LogGuard, LogError> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path, std::process::id());

    std::fs::create_dir_all(&log_dir).map_err(|source| LogError::CreateDir {
        dir: log_dir.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_filter());

    Registry::default().with(file_layer).try_init()?;

    let log_file = log_dir.join(filename);
    tracing::debug!(path = %log_file.display(), "logging initialised");
    Ok(LogGuard {
        _file_guard: file_guard,
        log_file,
    })
}

fn create_filter() -> EnvFilter {
    EnvFilter::new(directives(
        env::var("ROUND_LOG").ok(),
        env::var("RUST_LOG").ok(),
    ))
}

fn directives(round_log: Option<String>, rust_log: Option<String>) -> String {
    if let Some(round_log) = round_log {
        return expand_round_log(&round_log);
    }
    if let Some(rust_log) = rust_log {
        return rust_log;
    }
    DEFAULT_DIRECTIVES.to_string()
}

/// `debug` becomes `warn,tui_round=debug,tui_round_core=debug,...`.
fn expand_round_log(round_log: &str) -> String {
    if round_log.contains(['=', ':', ',']) {
        return round_log.to_string();
    }

    let mut out = String::from("warn");
    for name in PROJECT_CRATES {
        out.push_str(&format!(",{name}={round_log}"));
    }
    out
}

fn resolve_log_path(override_path: Option<PathBuf>, pid: u32) -> (PathBuf, String) {
    let filename = format!("tui-round-{pid}.log");

    match override_path {
        Some(path) if path.extension().is_some() => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => Path::new(".").to_path_buf(),
            };
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            (dir, name)
        }
        Some(dir) => (dir, filename),
        None => {
            let dir = dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tui-round")
                .join("logs");
            (dir, filename)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_log_wins_over_rust_log() {
        let d = directives(Some("trace".into()), Some("error".into()));
        assert!(d.starts_with("warn,"));
        assert!(d.contains("tui_round_core=trace"));
        assert!(!d.contains("error"));
    }

    #[test]
    fn rust_log_is_used_verbatim() {
        assert_eq!(directives(None, Some("info,foo=debug".into())), "info,foo=debug");
    }

    #[test]
    fn default_keeps_dependencies_quiet() {
        assert_eq!(directives(None, None), DEFAULT_DIRECTIVES);
    }

    #[test]
    fn advanced_round_log_is_not_expanded() {
        assert_eq!(expand_round_log("tui_round_core=trace"), "tui_round_core=trace");
    }

    #[test]
    fn file_path_override_splits_into_dir_and_name() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("/tmp/x/game.log")), 7);
        assert_eq!(dir, PathBuf::from("/tmp/x"));
        assert_eq!(name, "game.log");
    }

    #[test]
    fn bare_file_name_lands_in_current_dir() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("game.log")), 7);
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "game.log");
    }

    #[test]
    fn directory_override_keeps_pid_name() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("/tmp/logs")), 42);
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, "tui-round-42.log");
    }

    #[test]
    fn default_path_is_namespaced() {
        let (dir, name) = resolve_log_path(None, 1);
        assert!(dir.ends_with("tui-round/logs"));
        assert_eq!(name, "tui-round-1.log");
    }
}
