//! Directory scan for Log Shipping Status exports.

use crate::error::{Result, UnifyError};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

/// List the entries of `dir` whose name starts with `prefix` and contains `marker`.
///
/// Names are returned in directory enumeration order, which the platform does
/// not guarantee to be sorted. Entries whose name is not valid UTF-8 are skipped.
pub fn select_files(dir: &Path, prefix: &str, marker: &str) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| match e.kind() {
        ErrorKind::NotFound => UnifyError::DirectoryNotFound(dir.to_path_buf()),
        _ => UnifyError::DirectoryRead {
            path: dir.to_path_buf(),
            source: Arc::new(e),
        },
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| UnifyError::DirectoryRead {
            path: dir.to_path_buf(),
            source: Arc::new(e),
        })?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            log::debug!("Skipping non UTF-8 entry {:?}", entry.file_name());
            continue;
        };
        if name.starts_with(prefix) && name.contains(marker) {
            names.push(name);
        }
    }

    log::debug!("{} matching file(s) in {}", names.len(), dir.display());
    Ok(names)
}
