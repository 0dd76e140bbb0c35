//! Tree data structure and its release discipline

use std::path::PathBuf;

use serde::Serialize;

use crate::fs::EntryKind;

use super::level_order::LevelOrder;

/// One filesystem entry in the built tree.
///
/// A node exclusively owns its children; sibling order is list order, the
/// order the directory lister returned the entries. The root has depth 1 and
/// every child sits one level below its parent.
#[derive(Debug, Serialize)]
pub struct TreeNode {
    pub path: PathBuf,
    pub depth: usize,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(path: PathBuf, depth: usize, kind: EntryKind) -> Self {
        Self {
            path,
            depth,
            kind,
            children: Vec::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.level_order().count()
    }

    /// Breadth-first iterator over the subtree rooted here.
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self)
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        // Drain descendants into a flat worklist so every node is dropped
        // with an empty child list; stack depth stays constant no matter how
        // deep the tree is.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
