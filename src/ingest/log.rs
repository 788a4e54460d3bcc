use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::SecsumError;
use crate::reporting::console;

/// Loads the operational log as raw lines, trailing newlines preserved and
/// file order kept. A missing file degrades to an empty sequence; bytes that
/// are not valid UTF-8 are replaced rather than refused.
pub fn load_log(path: &Path) -> Result<Vec<String>, SecsumError> {
    if !path.exists() {
        console::warn("Log file missing, skipping log analysis");
        return Ok(Vec::new());
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();

    info!(lines = lines.len(), path = %path.display(), "log loaded");
    console::ok(&format!("Log loaded ({} lines)", lines.len()));
    Ok(lines)
}
