//! Filesystem collaborators: directory listing and path classification
//!
//! The tree builder never touches `std::fs` directly; it goes through these
//! two traits so tests can substitute a deterministic filesystem with a
//! fixed listing order.

use std::ffi::OsString;
use std::io;
use std::path::Path;

use serde::Serialize;

/// What a path turned out to be when classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
    /// Anything else: sockets, device nodes, entries that could not be
    /// classified. Treated as a leaf, same as a regular file.
    Other,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// Produces the child entry names of a directory.
///
/// Names are simple relative names (no path separators), in whatever order
/// the underlying source returns them. That order is opaque here and must be
/// preserved by callers.
pub trait DirectoryLister {
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>>;
}

/// Reports whether a path is a directory, a regular file, or something else.
pub trait PathClassifier {
    fn classify(&self, path: &Path) -> io::Result<EntryKind>;
}

/// The real filesystem, backed by `std::fs`.
///
/// Classification uses `std::fs::metadata`, which follows symlinks: a link
/// to a directory classifies as a directory and gets walked. There is no
/// cycle detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl DirectoryLister for OsFilesystem {
    fn list(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }
}

impl PathClassifier for OsFilesystem {
    fn classify(&self, path: &Path) -> io::Result<EntryKind> {
        let file_type = std::fs::metadata(path)?.file_type();
        if file_type.is_dir() {
            Ok(EntryKind::Directory)
        } else if file_type.is_file() {
            Ok(EntryKind::File)
        } else {
            Ok(EntryKind::Other)
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_list_returns_simple_names() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let names = OsFilesystem.list(dir.path()).unwrap();
        let mut names: Vec<String> = names
            .into_iter()
            .map(|n| n.to_string_lossy().to_string())
            .collect();
        names.sort();

        assert_eq!(names, vec!["a.txt", "sub"]);
        assert!(names.iter().all(|n| !n.contains('/')));
    }

    #[test]
    fn test_list_nonexistent_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(OsFilesystem.list(&missing).is_err());
    }

    #[test]
    fn test_classify_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "a").unwrap();

        assert_eq!(
            OsFilesystem.classify(dir.path()).unwrap(),
            EntryKind::Directory
        );
        assert_eq!(OsFilesystem.classify(&file).unwrap(), EntryKind::File);
    }

    #[test]
    fn test_classify_nonexistent_fails() {
        let dir = TempDir::new().unwrap();
        assert!(OsFilesystem.classify(&dir.path().join("missing")).is_err());
    }
}
