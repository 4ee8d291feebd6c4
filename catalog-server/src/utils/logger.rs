//! Logging Infrastructure
//!
//! `RUST_LOG` takes precedence over the configured level. When a log
//! directory is given and exists, output goes to a daily rolling file instead
//! of stdout.

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "catalog-server";

/// Build the filter: `RUST_LOG` if set, otherwise `level`
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Daily rolling writer for `dir`, if the directory exists
pub fn file_writer(dir: &str) -> Option<RollingFileAppender> {
    let path = Path::new(dir);
    if !path.is_dir() {
        return None;
    }
    Some(tracing_appender::rolling::daily(path, LOG_FILE_PREFIX))
}

/// Initialize the global subscriber
pub fn init_logger(level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match log_dir.and_then(file_writer) {
        Some(writer) => subscriber.with_ansi(false).with_writer(writer).init(),
        None => {
            subscriber.init();
            if let Some(dir) = log_dir {
                tracing::warn!("Log directory {} does not exist, logging to stdout", dir);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_writer_requires_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        assert!(file_writer(dir_str).is_some());

        let missing = dir.path().join("missing");
        assert!(file_writer(missing.to_str().unwrap()).is_none());
    }

    #[test]
    fn invalid_level_falls_back() {
        // never panics, even for garbage directives
        let _ = env_filter("not a [valid directive");
    }
}
