//! Command-line argument parsing and handling.

use clap::Parser;

/// envfill - fill values for a `.env.template` and write `KEY=value` lines
#[derive(Parser, Debug)]
#[command(name = "envfill")]
#[command(version)]
#[command(
    about = "Fill values for variables from a .env.template and write KEY=value lines to .env (or .env1, .env2, ...)",
    long_about = None
)]
pub struct Args {
    /// Path to the env template file
    #[arg(default_value = crate::defaults::TEMPLATE_FILE)]
    pub template: String,

    /// Write to this exact path instead of picking a non-colliding name
    #[arg(short, long)]
    pub output: Option<String>,

    /// Accept every declared default without prompting
    #[arg(long)]
    pub use_defaults: bool,

    /// Extra case-insensitive substrings that mark keys as sensitive (masked input)
    #[arg(long, num_args = 1..)]
    pub mask: Vec<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `log_level` argument.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
