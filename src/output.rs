//! Output file naming and writing.
//!
//! The generated env file never clobbers an existing one unless the caller
//! forces an exact path: the default base name gets a numeric suffix
//! (`.env`, `.env1`, `.env2`, ...) until a free name is found.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::serialize::serialize_value;

/// What: Pick the first non-existing path among `base`, `base1`, `base2`, ...
///
/// Inputs:
/// - `base`: Preferred output path.
///
/// Output:
/// - `base` itself when nothing exists there, otherwise the first suffixed
///   sibling that does not exist yet.
#[must_use]
pub fn choose_output_path(base: &Path) -> PathBuf {
    if !base.exists() {
        return base.to_path_buf();
    }
    let mut counter: u32 = 1;
    loop {
        let mut name = base.as_os_str().to_os_string();
        name.push(counter.to_string());
        let candidate = PathBuf::from(name);
        if !candidate.exists() {
            debug!(path = %candidate.display(), "base name taken, using suffixed path");
            return candidate;
        }
        counter += 1;
    }
}

/// What: Write `(key, value)` pairs as `KEY=VALUE` lines.
///
/// Inputs:
/// - `path`: Destination file; created or truncated.
/// - `pairs`: Final values in output order.
///
/// Output:
/// - `Ok(())` on success; otherwise the underlying I/O error.
///
/// Details:
/// - Values are rendered with [`serialize_value`], one pair per line.
pub fn write_env_file(path: &Path, pairs: &[(String, String)]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for (key, value) in pairs {
        writeln!(file, "{key}={}", serialize_value(value))?;
    }
    Ok(())
}
