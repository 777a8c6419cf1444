//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tempfile::NamedTempFile;

use crate::domain::ports::{FileMode, FileSystem};
use crate::error::{KitError, KitResult};

/// Local file system implementation
///
/// Writes go to a temporary file in the destination directory and are
/// renamed into place, so a destination is never observed half-written.
/// A destination that is a symlink is written through: the rename lands
/// on the link's target and the link itself is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> KitResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| KitError::io(path, e))
    }

    fn read_to_string(&self, path: &Path) -> KitResult<String> {
        std::fs::read_to_string(path).map_err(|e| KitError::io(path, e))
    }

    fn mode(&self, path: &Path) -> KitResult<FileMode> {
        let metadata = std::fs::metadata(path).map_err(|e| KitError::io(path, e))?;
        Ok(mode_of(&metadata))
    }

    fn create_dir_all(&self, path: &Path) -> KitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| KitError::io(path, e))
    }

    fn write_atomic(&self, path: &Path, content: &[u8], mode: Option<FileMode>) -> KitResult<()> {
        let resolved = resolve_link(path).map_err(|e| KitError::io(path, e))?;
        let path = resolved.as_path();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| KitError::io(parent, e))?;
        temp.write_all(content).map_err(|e| KitError::io(path, e))?;

        // NamedTempFile is created 0600; without an explicit mode fall back
        // to what a plain create would have produced.
        let mode = match mode {
            Some(mode) => mode,
            None => default_mode(path),
        };
        set_mode(temp.as_file(), mode).map_err(|e| KitError::io(path, e))?;

        temp.persist(path).map_err(|e| KitError::io(path, e.error))?;
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> KitResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(dir).standard_filters(false).build();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let err = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                KitError::io(dir, err)
            })?;
            if entry.file_type().is_some_and(|t| !t.is_dir()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    fn list_dirs(&self, dir: &Path) -> KitResult<Vec<PathBuf>> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(KitError::io(dir, e)),
        };

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| KitError::io(dir, e))?;
            let is_dir = entry
                .file_type()
                .map_err(|e| KitError::io(entry.path(), e))?
                .is_dir();
            if is_dir {
                dirs.push(entry.path());
            }
        }

        dirs.sort();
        Ok(dirs)
    }
}

/// Final target of `path` when it is a symlink, `path` itself otherwise.
/// A dangling link resolves to where it points so the write creates it.
fn resolve_link(path: &Path) -> std::io::Result<PathBuf> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match std::fs::canonicalize(path) {
            Ok(target) => Ok(target),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let link = std::fs::read_link(path)?;
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                Ok(base.join(link))
            }
            Err(e) => Err(e),
        },
        _ => Ok(path.to_path_buf()),
    }
}

#[cfg(unix)]
fn mode_of(metadata: &std::fs::Metadata) -> FileMode {
    use std::os::unix::fs::PermissionsExt;
    FileMode::from_bits(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn mode_of(metadata: &std::fs::Metadata) -> FileMode {
    if metadata.permissions().readonly() {
        FileMode::from_bits(0o444)
    } else {
        FileMode::from_bits(0o644)
    }
}

/// Mode for a write without an explicit one: keep the existing file's,
/// otherwise 0644.
fn default_mode(path: &Path) -> FileMode {
    std::fs::metadata(path)
        .map(|m| mode_of(&m))
        .unwrap_or(FileMode::from_bits(0o644))
}

#[cfg(unix)]
fn set_mode(file: &std::fs::File, mode: FileMode) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(mode.bits()))
}

#[cfg(not(unix))]
fn set_mode(file: &std::fs::File, mode: FileMode) -> std::io::Result<()> {
    let mut permissions = file.metadata()?.permissions();
    permissions.set_readonly(mode.is_readonly());
    file.set_permissions(permissions)
}
