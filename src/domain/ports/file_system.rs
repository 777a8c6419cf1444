//! FileSystem port - abstraction over file I/O operations
//!
//! The deploy engine only needs a handful of operations: existence checks,
//! reads, recursive directory creation, an atomic write and permission bits.

use std::path::{Path, PathBuf};

use crate::error::KitResult;

/// Permission bits carried from a source file onto its destination
///
/// On Unix this is the `st_mode & 0o7777` value. Elsewhere only the
/// read-only flag is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMode {
    bits: u32,
}

impl FileMode {
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            bits: bits & 0o7777,
        }
    }

    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// No write bit set for anyone
    pub const fn is_readonly(&self) -> bool {
        self.bits & 0o222 == 0
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFs` - in-memory, for tests
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read raw file content
    fn read(&self, path: &Path) -> KitResult<Vec<u8>>;

    /// Read file content as UTF-8 text
    fn read_to_string(&self, path: &Path) -> KitResult<String>;

    /// Permission bits of an existing file
    fn mode(&self, path: &Path) -> KitResult<FileMode>;

    /// Create directory and parents (no-op when it already exists)
    fn create_dir_all(&self, path: &Path) -> KitResult<()>;

    /// Replace `path` with `content` atomically, applying `mode` when given
    fn write_atomic(&self, path: &Path, content: &[u8], mode: Option<FileMode>) -> KitResult<()>;

    /// List files under `dir` recursively, sorted by path
    fn list_files(&self, dir: &Path) -> KitResult<Vec<PathBuf>>;

    /// Immediate subdirectories of `dir`, sorted; empty if `dir` is absent
    fn list_dirs(&self, dir: &Path) -> KitResult<Vec<PathBuf>>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_mode_masks_file_type_bits() {
        let mode = FileMode::from_bits(0o100755);
        assert_eq!(mode.bits(), 0o755);
    }

    #[test]
    fn file_mode_readonly() {
        assert!(FileMode::from_bits(0o444).is_readonly());
        assert!(!FileMode::from_bits(0o644).is_readonly());
    }

    #[test]
    fn mock_fs_tracks_mutations() {
        let fs = mock::MockFs::new().with_file("/a/b.txt", "x");
        assert!(fs.exists(Path::new("/a/b.txt")));
        assert!(fs.is_dir(Path::new("/a")));
        assert_eq!(fs.mutation_count(), 0);

        fs.write_atomic(Path::new("/a/c.txt"), b"y", None).unwrap();
        assert_eq!(fs.mutation_count(), 1);
        assert_eq!(fs.content("/a/c.txt").as_deref(), Some("y"));
    }
}
