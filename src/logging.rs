//! File logging.
//!
//! The TUI owns stdout, so logs only go to a file, and only when `FLICKS_LOG`
//! names one. `RUST_LOG` filters as usual (default `info`).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_PATH_VAR: &str = "FLICKS_LOG";

/// Install the global subscriber if `FLICKS_LOG` is set. Returns whether
/// logging is active.
pub fn init_tracing() -> bool {
    let Some(log_path) = std::env::var_os(LOG_PATH_VAR).filter(|p| !p.is_empty()) else {
        return false;
    };
    init_file_tracing(Path::new(&log_path))
}

/// Append logs to `path`. A file that cannot be opened disables logging
/// with a warning on stderr rather than failing startup.
pub fn init_file_tracing(path: &Path) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            return false;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
}
