//! Streaming ZIP archive builder
//!
//! Two entry points: [`pack_dir`] walks a file or directory tree depth-first
//! and emits one entry per file (plus one trailing-slash entry per empty
//! directory when structure is preserved); [`pack_files`] writes an explicit
//! ordered list of files under their base names. Both stream file contents
//! through a fixed-size buffer, share a single `ZipWriter` for the whole
//! build, and finalize the container best-effort on every exit path.

use crate::archive::{CancelFlag, PackOptions};
use crate::{Error, Result};
use std::fs::{self, File};
use std::io::{Read, Seek, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};
use zip::write::FileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

/// Copy-buffer size for streaming file payloads. Bounds peak memory for
/// arbitrarily large files; not user-configurable.
const BUFFER_SIZE: usize = 8 * 1024;

/// Pack a file or directory into a ZIP archive written to `sink`.
///
/// The root entry name is the base name of `source`. With `keep_structure`
/// set, nested files keep their relative path in the entry name and empty
/// directories are preserved as `name/` entries; without it, every file
/// lands at the archive root under its base name and directories are
/// dropped entirely.
pub fn pack_dir<P, W>(source: P, sink: W, keep_structure: bool) -> Result<()>
where
    P: AsRef<Path>,
    W: Write + Seek,
{
    pack_dir_with_options(
        source,
        sink,
        &PackOptions {
            keep_structure,
            ..Default::default()
        },
    )
}

/// Pack a file or directory into a ZIP archive with options
pub fn pack_dir_with_options<P, W>(source: P, sink: W, options: &PackOptions) -> Result<()>
where
    P: AsRef<Path>,
    W: Write + Seek,
{
    let source = source.as_ref();

    if !source.exists() {
        return Err(Error::SourceNotFound(source.to_path_buf()));
    }
    let root_name = base_name(source)?;

    info!(
        "Packing {:?} into ZIP (keep_structure: {})",
        source, options.keep_structure
    );
    let start = Instant::now();

    let mut zip = ZipWriter::new(sink);
    let walk = compress(&mut zip, source, &root_name, options);
    finalize(zip, walk)?;

    info!("Packed {:?} in {:.2?}", source, start.elapsed());
    Ok(())
}

/// Pack an ordered list of files into a ZIP archive written to `sink`.
///
/// Each path's base name becomes its entry name; entries appear in input
/// order. Directories are not permitted in this form. Supplying two paths
/// with the same base name writes two entries with the same name (see
/// [`PackOptions::keep_structure`] for the duplicate-name contract).
pub fn pack_files<P, W>(files: &[P], sink: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write + Seek,
{
    pack_files_with_options(files, sink, None)
}

/// Pack an ordered list of files with a cancellation flag
pub fn pack_files_with_options<P, W>(files: &[P], sink: W, cancel: Option<&CancelFlag>) -> Result<()>
where
    P: AsRef<Path>,
    W: Write + Seek,
{
    info!("Packing {} files into ZIP", files.len());
    let start = Instant::now();

    let mut zip = ZipWriter::new(sink);
    let walk = write_file_list(&mut zip, files, cancel);
    finalize(zip, walk)?;

    info!("Packed {} files in {:.2?}", files.len(), start.elapsed());
    Ok(())
}

/// Recursive compress step.
///
/// The writer is shared across the whole recursion and is only finalized by
/// the top-level entry point, never here.
fn compress<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    path: &Path,
    name: &str,
    options: &PackOptions,
) -> Result<()> {
    if let Some(cancel) = &options.cancel {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
    }

    if path.is_file() {
        return write_file_entry(zip, path, name);
    }

    // Children are sorted by file name so the entry order is deterministic
    // across builds regardless of the platform's read_dir order.
    let mut children = fs::read_dir(path)?.collect::<std::io::Result<Vec<_>>>()?;
    children.sort_by_key(|entry| entry.file_name());

    if children.is_empty() {
        // An empty directory only exists in the archive as a trailing-slash
        // entry, and only when the hierarchy is being preserved.
        if options.keep_structure {
            let dir_name = format!("{}/", name);
            debug!("Adding directory to ZIP: {}", dir_name);
            zip.add_directory(dir_name, entry_options(path, CompressionMethod::Stored))?;
        }
        return Ok(());
    }

    for child in children {
        let child_name = child.file_name().to_string_lossy().into_owned();
        let entry_name = if options.keep_structure {
            format!("{}/{}", name, child_name)
        } else {
            child_name
        };
        compress(zip, &child.path(), &entry_name, options)?;
    }

    Ok(())
}

/// Stream one file into the archive under the given entry name
fn write_file_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    path: &Path,
    name: &str,
) -> Result<()> {
    debug!("Adding file to ZIP: {:?} as {}", path, name);

    let mut file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    zip.start_file(name, entry_options(path, CompressionMethod::Deflated))?;

    let mut buf = [0u8; BUFFER_SIZE];
    loop {
        let len = file.read(&mut buf).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if len == 0 {
            break;
        }
        zip.write_all(&buf[..len]).map_err(|source| Error::Write {
            name: name.to_string(),
            source,
        })?;
    }

    Ok(())
}

/// Write the flat file-list form, in input order
fn write_file_list<P, W>(
    zip: &mut ZipWriter<W>,
    files: &[P],
    cancel: Option<&CancelFlag>,
) -> Result<()>
where
    P: AsRef<Path>,
    W: Write + Seek,
{
    for file in files {
        if let Some(cancel) = cancel {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
        }

        let path = file.as_ref();
        if !path.exists() {
            return Err(Error::SourceNotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(Error::InvalidPath(format!(
                "{:?} is not a regular file",
                path
            )));
        }

        let name = base_name(path)?;
        write_file_entry(zip, path, &name)?;
    }

    Ok(())
}

/// Finalize the container on both success and failure paths.
///
/// A failed walk still gets its trailer written so the output is a valid
/// (if incomplete) archive. A finalize failure after a primary failure is
/// only logged; the caller sees the primary error.
fn finalize<W: Write + Seek>(zip: ZipWriter<W>, walk: Result<()>) -> Result<()> {
    match zip.finish() {
        Ok(_) => walk,
        Err(err) => match walk {
            Ok(()) => Err(err.into()),
            Err(primary) => {
                warn!("Failed to finalize archive after error: {}", err);
                Err(primary)
            }
        },
    }
}

/// Per-entry options; carries unix permission bits where available
fn entry_options(path: &Path, method: CompressionMethod) -> FileOptions<'static, ()> {
    let options = FileOptions::default().compression_method(method);

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        match fs::metadata(path) {
            Ok(metadata) => options.unix_permissions(metadata.permissions().mode()),
            Err(_) => options,
        }
    };

    options
}

fn base_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidPath(format!("{:?} has no base name", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn pack_single_file_into_memory_sink() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let test_file = temp_dir.path().join("test.txt");
        fs::write(&test_file, b"Test content")?;

        let mut sink = Cursor::new(Vec::new());
        pack_dir(&test_file, &mut sink, true)?;

        let mut archive = zip::ZipArchive::new(sink)?;
        assert_eq!(archive.len(), 1);

        let mut entry = archive.by_index(0)?;
        assert_eq!(entry.name(), "test.txt");

        let mut content = Vec::new();
        entry.read_to_end(&mut content)?;
        assert_eq!(content, b"Test content");

        Ok(())
    }

    #[test]
    fn missing_source_fails_before_any_write() {
        let mut sink = Cursor::new(Vec::new());
        let result = pack_dir(Path::new("/nonexistent/source"), &mut sink, true);

        assert!(matches!(result, Err(Error::SourceNotFound(_))));
        assert!(sink.get_ref().is_empty());
    }
}
