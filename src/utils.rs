use fs2::FileExt;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Durable text write: stage to a locked tmp sibling, fsync, then rename
/// into place so readers never observe a partial report.
pub fn write_text(path: &Path, contents: &str) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp_path = path.with_extension("tmp");
    let mut file = File::create(&tmp_path)?;
    file.lock_exclusive()?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    drop(file);
    fs::rename(&tmp_path, path)?;
    Ok(())
}
