//! Log file naming and startup pruning.
//!
//! Files are named `logs_<DD-MM-YY_HH-MM-SS>.log`. Every numeric component
//! is zero padded, which is what lets pruning order entries by name.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Timestamp layout embedded in file names. Must stay zero padded.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%y_%H-%M-%S";

pub const FILE_PREFIX: &str = "logs_";

pub const FILE_SUFFIX: &str = ".log";

/// File name for a logger created at `now`, at one-second resolution.
pub fn log_file_name(now: &DateTime<Local>) -> String {
    format!("{}{}{}", FILE_PREFIX, now.format(TIMESTAMP_FORMAT), FILE_SUFFIX)
}

pub fn log_file_path(directory: &Path, now: &DateTime<Local>) -> PathBuf {
    directory.join(log_file_name(now))
}

/// Delete the entry with the smallest name if `directory` holds more than
/// `retention_count` entries.
///
/// All direct entries are counted, whatever their name or type. At most one
/// entry is removed per call. A missing or unreadable directory is a no-op
/// and removal failures are ignored.
///
/// **Returns**
/// - `Some(path)` of the entry that was removed.
/// - `None` if nothing was over the limit or the removal did not happen.
pub fn prune_oldest(directory: &Path, retention_count: usize) -> Option<PathBuf> {
    if !directory.exists() {
        return None;
    }

    let mut names: Vec<_> = match fs::read_dir(directory) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name())
            .collect(),
        Err(e) => {
            debug!(dir = %directory.display(), error = %e, "cannot list log directory, skipping prune");
            return None;
        }
    };

    if names.len() <= retention_count {
        return None;
    }

    names.sort();
    let oldest = directory.join(&names[0]);
    let is_dir = fs::symlink_metadata(&oldest).map(|m| m.is_dir()).unwrap_or(false);
    let removed = if is_dir {
        fs::remove_dir(&oldest)
    } else {
        fs::remove_file(&oldest)
    };

    match removed {
        Ok(()) => {
            debug!(path = %oldest.display(), retention_count, "pruned oldest log entry");
            Some(oldest)
        }
        Err(e) => {
            debug!(path = %oldest.display(), error = %e, "failed to prune oldest log entry");
            None
        }
    }
}
