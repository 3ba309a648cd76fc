//! User-facing defaults for template discovery, output naming, and masking.

/// Template file read when no path is given on the command line.
pub const TEMPLATE_FILE: &str = ".env.template";

/// Base name for the generated env file; collisions append 1, 2, ...
pub const OUTPUT_FILE: &str = ".env";

/// Key-name substrings that trigger masked input during prompts.
/// The match is case-insensitive and based on substring membership.
pub const SENSITIVE_HINTS: [&str; 4] = ["KEY", "PASSWORD", "SECRET", "TOKEN"];
