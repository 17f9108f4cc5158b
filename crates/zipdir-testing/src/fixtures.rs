//! Common test fixtures for zipdir testing

use crate::TestDir;
use anyhow::Result;

/// Creates the canonical source tree used by the packing tests:
/// nested files, a deeper subdirectory, and an empty directory.
///
/// ```text
/// root/
///   a.txt
///   sub/
///     b.txt
///     inner/
///       c.txt
///   empty/
/// ```
pub fn create_source_tree(test_dir: &TestDir) -> Result<()> {
    test_dir.create_file("root/a.txt", b"alpha content")?;
    test_dir.create_file("root/sub/b.txt", b"bravo content")?;
    test_dir.create_file("root/sub/inner/c.txt", b"charlie content")?;
    test_dir.create_dir("root/empty")?;
    Ok(())
}

/// Creates a file of `len` bytes with a deterministic repeating pattern,
/// so payload comparisons catch reordered or truncated chunks
pub fn create_patterned_file(test_dir: &TestDir, name: &str, len: usize) -> Result<Vec<u8>> {
    let content: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    test_dir.create_file(name, &content)?;
    Ok(content)
}
