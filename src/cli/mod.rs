// CLI module
// Command-line interface, argument parsing and command execution

mod args;
pub mod commands;

pub use args::{CliArgs, Command};
pub use commands::execute;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments, missing required arguments,
/// or --help flag), clap will automatically display an error message or
/// help text and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber
///
/// Verbosity comes from `RUST_LOG`; without it only warnings and errors
/// are shown.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
