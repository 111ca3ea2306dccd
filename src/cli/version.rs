//! `--version` and `--help` output.

/// Read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("flicks {}", VERSION)
}

pub fn usage() -> String {
    format!(
        "{}
Browse a movie catalog in the terminal.

USAGE:
    flicks [OPTIONS] [PATH]

ARGS:
    [PATH]    Route to open first, e.g. /movie/42 (default: /)

OPTIONS:
    -h, --help       Print this help
    -V, --version    Print version

ENVIRONMENT:
    FLICKS_LIST_URL          List endpoint
    FLICKS_DETAIL_URL        Detail endpoint template containing {{id}}
    FLICKS_SUMMARY_LIMIT     Characters of summary shown per list entry
    FLICKS_MIN_SEARCH_LEN    Shortest search term sent to the server
    FLICKS_TIMEOUT_SECS      Per-request timeout in seconds (default: none)
    FLICKS_LOG               Write logs to this file (filter with RUST_LOG)",
        version_line()
    )
}
