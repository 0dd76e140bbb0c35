//! Strata - a tree command that lists a directory subtree level by level

pub mod fs;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use fs::{DirectoryLister, EntryKind, OsFilesystem, PathClassifier};
pub use output::{LevelFormatter, OutputConfig, print_json, render_levels};
pub use tree::{BuilderConfig, Entry, LevelOrder, TreeBuilder, TreeNode};
