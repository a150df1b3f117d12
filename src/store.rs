//! File store boundary: reads, atomic writes
//!
//! The editing core never touches the filesystem directly; everything goes
//! through these two calls. Writes are all-or-nothing: content lands in a
//! temporary file next to the target and is renamed over it, so a failure
//! at any point leaves the original file intact.

use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Read a file's entire content.
pub fn read_file(path: &Path) -> Result<String, StoreError> {
    if path.exists() && !path.is_file() {
        return Err(StoreError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write content atomically: temp file in the same directory, then rename.
pub fn write_file(path: &Path, content: &str) -> Result<(), StoreError> {
    let wrap = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(wrap)?;
        }
    }

    let tmp = tmp_path(path);
    std::fs::write(&tmp, content).map_err(wrap)?;
    std::fs::rename(&tmp, path).map_err(|source| {
        // Leave no stray temp file behind on a failed rename.
        let _ = std::fs::remove_file(&tmp);
        wrap(source)
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());
    name.push_str(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".bashrc");
        write_file(&path, "alias ll='ls -la'\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "alias ll='ls -la'\n");
    }

    #[test]
    fn test_write_replaces_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".bashrc");
        write_file(&path, "old\n").unwrap();
        write_file(&path, "new\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "new\n");
        // No temp file left behind.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_read_missing_file_is_typed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent");
        let err = read_file(&path).unwrap_err();
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_read_directory_rejected() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            read_file(dir.path()),
            Err(StoreError::NotAFile { .. })
        ));
    }
}
