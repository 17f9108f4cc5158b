//! Utility functions for zipdir-core

use std::fs;
use std::path::Path;

/// Total size in bytes of a file or a directory tree.
///
/// Unreadable entries count as zero. This is a reporting helper for
/// callers that want to log how much data a build is about to touch; it is
/// not part of the archiving contract.
pub fn total_size<P: AsRef<Path>>(path: P) -> u64 {
    let path = path.as_ref();

    if path.is_file() {
        return fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    }

    let Ok(entries) = fs::read_dir(path) else {
        return 0;
    };
    entries
        .flatten()
        .map(|entry| total_size(entry.path()))
        .sum()
}
