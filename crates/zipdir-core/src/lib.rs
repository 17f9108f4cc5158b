//! zipdir - a streaming directory-to-zip archiver library
//!
//! This library walks a filesystem subtree (files, nested directories,
//! empty directories) and serializes it into a single ZIP archive written
//! to any caller-supplied `Write + Seek` sink, with a caller-selectable
//! policy for whether the original directory hierarchy is preserved
//! inside the archive.

pub mod archive;
pub mod error;
pub mod utils;

pub use error::{Error, Result};

// Re-export commonly used types
pub use archive::{
    pack_dir, pack_dir_with_options, pack_files, pack_files_with_options, CancelFlag, PackOptions,
};
