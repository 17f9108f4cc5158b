//! Archive assertions for zipdir testing
//!
//! Helpers that read a finished archive back and compute the entry names a
//! source tree should have produced, so tests can compare the two.

use anyhow::Result;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use walkdir::WalkDir;
use zip::ZipArchive;

/// Returns the entry names of an archive in central-directory order,
/// which for archives produced by zipdir is the write order
pub fn entry_names(archive: &Path) -> Result<Vec<String>> {
    let mut zip = ZipArchive::new(File::open(archive)?)?;
    let mut names = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        names.push(zip.by_index(i)?.name().to_string());
    }
    Ok(names)
}

/// Returns the decompressed payload of the entry with the given name
pub fn entry_content(archive: &Path, name: &str) -> Result<Vec<u8>> {
    let mut zip = ZipArchive::new(File::open(archive)?)?;
    let mut entry = zip.by_name(name)?;
    let mut content = Vec::new();
    entry.read_to_end(&mut content)?;
    Ok(content)
}

/// Returns the decompressed payload of the entry at the given index
pub fn entry_content_at(archive: &Path, index: usize) -> Result<Vec<u8>> {
    let mut zip = ZipArchive::new(File::open(archive)?)?;
    let mut entry = zip.by_index(index)?;
    let mut content = Vec::new();
    entry.read_to_end(&mut content)?;
    Ok(content)
}

/// Computes, sorted, the entry names packing `root` should produce.
///
/// Under the structure-preserving policy that is every file and every empty
/// directory, prefixed with the root's base name (directories with a
/// trailing slash); under the flattening policy it is just the base names
/// of the files.
pub fn expected_names(root: &Path, keep_structure: bool) -> Result<Vec<String>> {
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if root.is_file() {
        return Ok(vec![root_name]);
    }

    let mut names = Vec::new();
    if keep_structure && fs::read_dir(root)?.next().is_none() {
        names.push(format!("{}/", root_name));
    }

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(root)?
            .to_string_lossy()
            .replace('\\', "/");

        if entry.file_type().is_dir() {
            let is_empty = fs::read_dir(entry.path())?.next().is_none();
            if keep_structure && is_empty {
                names.push(format!("{}/{}/", root_name, relative));
            }
        } else if keep_structure {
            names.push(format!("{}/{}", root_name, relative));
        } else {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    names.sort();
    Ok(names)
}
