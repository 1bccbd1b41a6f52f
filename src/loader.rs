use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse one snapshot file. Errors carry the file path so the
/// caller can report old/new failures independently.
pub fn load_snapshot(path: &Path) -> Result<Value, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Unable to read {}: {}", path.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("{} is not valid JSON: {}", path.display(), e))
}
