//! Application orchestration: read the template, collect values, write the
//! env file.
//!
//! The whole run is sequential: the template is parsed in one pass before
//! any prompting starts, and nothing is written until every value is known.

use std::fs;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

use crate::args::Args;
use crate::output::{choose_output_path, write_env_file};
use crate::prompt::{TerminalPrompt, accept_defaults, prompt_for_values};
use crate::template::parse_template_lines;

/// What: Run one fill pass end to end.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Ok(())` after writing the env file, or on an empty template (which is
///   a successful no-op: no file is created). `Err` when the template is
///   missing or unreadable, or the output cannot be written.
pub fn run(args: &Args) -> Result<()> {
    let template_path = Path::new(&args.template);
    if !template_path.exists() {
        return Err(format!("template file not found: {}", args.template).into());
    }
    let content = fs::read_to_string(template_path)
        .map_err(|e| format!("failed to read template: {e}"))?;

    let entries = parse_template_lines(&content);
    tracing::info!(count = entries.len(), "parsed template entries");
    if entries.is_empty() {
        return Ok(());
    }

    let filled = if args.use_defaults {
        accept_defaults(&entries)
    } else {
        prompt_for_values(&entries, &args.mask, &mut TerminalPrompt)
    };

    let out_path = match &args.output {
        Some(forced) => PathBuf::from(forced),
        None => choose_output_path(Path::new(crate::defaults::OUTPUT_FILE)),
    };
    write_env_file(&out_path, &filled).map_err(|e| format!("failed to write env file: {e}"))?;
    tracing::info!(path = %out_path.display(), "wrote env file");
    Ok(())
}
