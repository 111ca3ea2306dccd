//! Command-line interface.
//!
//! Called before the TUI starts so `--version` and `--help` never touch the
//! terminal:
//!
//! ```ignore
//! match parse_args(std::env::args()) {
//!     CliCommand::RunTui { start_path } => { /* start the TUI */ }
//!     other => { run_cli_command(&other); }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage, version_line, VERSION};

/// Print the output of a non-TUI command. Returns `false` for
/// [`CliCommand::RunTui`], which has no CLI output.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            println!("{}", usage());
            true
        }
        CliCommand::RunTui { .. } => false,
    }
}
