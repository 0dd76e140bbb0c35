//! TreeBuilder - depth-first walk over the lister and classifier

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::fs::{DirectoryLister, EntryKind, PathClassifier};

use super::config::BuilderConfig;
use super::node::TreeNode;

/// Builds the full tree in memory by walking depth-first.
///
/// Entries whose name starts with `.` are skipped; the single prefix check
/// covers the `.` and `..` entries as well as every dotfile. Listing order
/// is preserved verbatim into the tree, never sorted.
pub struct TreeBuilder<F> {
    config: BuilderConfig,
    fs: F,
}

impl<F: DirectoryLister + PathClassifier> TreeBuilder<F> {
    pub fn new(config: BuilderConfig, fs: F) -> Self {
        Self { config, fs }
    }

    /// Build the tree rooted at `path`. The root has depth 1.
    ///
    /// Never fails on its own: a directory that cannot be listed keeps zero
    /// children and an entry that cannot be classified becomes a leaf, with
    /// a diagnostic on stderr in either case. The walk continues elsewhere.
    pub fn build(&self, path: &Path) -> TreeNode {
        let kind = match self.fs.classify(path) {
            Ok(kind) => kind,
            Err(e) => {
                eprintln!("strata: cannot stat '{}': {}", path.display(), e);
                EntryKind::Other
            }
        };
        self.build_entry(path.to_path_buf(), 1, kind)
    }

    fn build_entry(&self, path: PathBuf, depth: usize, kind: EntryKind) -> TreeNode {
        let mut node = TreeNode::new(path, depth, kind);

        if kind != EntryKind::Directory || self.past_max_depth(depth) {
            return node;
        }

        let names = match self.fs.list(&node.path) {
            Ok(names) => names,
            Err(e) => {
                eprintln!(
                    "strata: cannot read directory '{}': {}",
                    node.path.display(),
                    e
                );
                return node;
            }
        };

        for name in names {
            if is_hidden(&name) {
                continue;
            }

            let child_path = node.path.join(&name);
            let child_kind = match self.fs.classify(&child_path) {
                Ok(kind) => kind,
                Err(e) => {
                    eprintln!("strata: cannot stat '{}': {}", child_path.display(), e);
                    EntryKind::Other
                }
            };

            // Directories recurse before the next sibling is examined.
            node.children
                .push(self.build_entry(child_path, depth + 1, child_kind));
        }

        node
    }

    fn past_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth > max)
    }
}

/// A name starting with `.` is hidden.
fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
