//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI starting at `start_path`
    RunTui { start_path: String },
}

/// Parse `std::env::args()`-style arguments; the first is the program name.
///
/// Flags win over the path wherever they appear. Unknown flags are ignored;
/// the last positional argument is the start path.
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut start_path = None;
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            flag if flag.starts_with('-') => {}
            _ => start_path = Some(arg),
        }
    }
    CliCommand::RunTui {
        start_path: start_path.unwrap_or_else(|| "/".to_string()),
    }
}
