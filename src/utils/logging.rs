use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "shredspace.log";

/// Where the rolling log files go.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("space", "shred", "shredspace").map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Installs the global subscriber.
///
/// The terminal only shows warnings unless `RUST_LOG` says otherwise, since
/// it is shared with the interactive menu. The log file records everything
/// from `debug` up. Keep the returned guard alive until exit.
pub fn init() -> Option<WorkerGuard> {
    let console = fmt::layer().with_writer(std::io::stderr).with_target(false).with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    );

    let (file, guard) = match log_dir().filter(|dir| std::fs::create_dir_all(dir).is_ok()) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(LevelFilter::DEBUG);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry().with(console).with(file).try_init();
    guard
}
