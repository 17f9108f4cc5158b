//! Archive operations module

pub mod zip;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub use self::zip::{pack_dir, pack_dir_with_options, pack_files, pack_files_with_options};

/// Cooperative cancellation flag, checked between archive entries.
///
/// Clones share the same underlying flag, so one handle can stay with a
/// signal handler or UI thread while another travels into the build call.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the running build to stop at the next entry boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Pack options for archive creation
pub struct PackOptions {
    /// Keep the source directory hierarchy in entry names.
    ///
    /// When true, every entry name is prefixed with its relative path from
    /// the root (root base name included), and empty directories get their
    /// own trailing-slash entry. When false, every file lands at the
    /// archive root under its base name and no directory entry is written.
    /// Two files sharing a base name then produce two entries with the same
    /// name; readers resolve the duplicate however they see fit.
    pub keep_structure: bool,
    /// Checked between entries. A cancelled build still finalizes the
    /// container before returning the cancellation error.
    pub cancel: Option<CancelFlag>,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            keep_structure: true,
            cancel: None,
        }
    }
}
