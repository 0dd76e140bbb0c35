//! Directory tree construction and traversal
//!
//! This module builds an in-memory tree for a filesystem subtree and
//! linearizes it breadth-first:
//!
//! - `TreeBuilder`: depth-first walk that materializes the tree
//! - `LevelOrder`: breadth-first iterator yielding depth/position/path
//!   entries in print order

mod builder;
mod config;
mod level_order;
mod node;

// Re-export public types
pub use builder::TreeBuilder;
pub use config::BuilderConfig;
pub use level_order::{Entry, LevelOrder};
pub use node::TreeNode;
