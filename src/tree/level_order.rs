//! Breadth-first linearization of a built tree

use std::collections::VecDeque;
use std::path::Path;

use crate::fs::EntryKind;

use super::node::TreeNode;

/// One entry of the level-ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 1-based distance from the root (the root itself is 1).
    pub depth: usize,
    /// 1-based position among the entries at this depth, in discovery order.
    pub position: usize,
    pub path: &'a Path,
    pub kind: EntryKind,
}

/// Breadth-first iterator over a tree.
///
/// Yields every node exactly once, all of depth D before any of depth D + 1,
/// ties broken by discovery order. The position counter restarts at 1 on
/// every depth boundary. Single pass: the queue holds borrowed nodes and
/// drains as the iterator advances.
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a TreeNode>,
    prev_depth: usize,
    position: usize,
}

impl<'a> LevelOrder<'a> {
    pub(super) fn new(root: &'a TreeNode) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self {
            queue,
            prev_depth: 0,
            position: 0,
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        for child in &node.children {
            self.queue.push_back(child);
        }

        // Queue order guarantees depths never decrease, so a depth change
        // always means the next level has started.
        if node.depth != self.prev_depth {
            self.prev_depth = node.depth;
            self.position = 0;
        }
        self.position += 1;

        Some(Entry {
            depth: node.depth,
            position: self.position,
            path: &node.path,
            kind: node.kind,
        })
    }
}
