//! Recursive discovery of log files.

use std::path::{Path, PathBuf};

use expstat_core::error::{Result, StatError};
use tracing::{debug, warn};

/// File-name suffix that identifies an experiment log file.
pub const LOG_SUFFIX: &str = ".log";

/// Find all files whose name ends in `.log`, recursively under `root`,
/// sorted by full path.
///
/// The sort gives deterministic grouping in the report regardless of the
/// underlying directory-walk order. A missing root fails fast with
/// [`StatError::RootNotFound`]; unreadable subdirectories are skipped with
/// a warning and the walk continues.
pub fn find_log_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(StatError::RootNotFound(root.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .map(|name| name.ends_with(LOG_SUFFIX))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    debug!("Found {} log files under {}", files.len(), root.display());
    Ok(files)
}
