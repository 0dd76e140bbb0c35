//! Configuration types for the tree builder

/// Configuration for tree building behavior.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    /// Descend only this many levels below the root; `None` means unlimited.
    /// Directories at the limit are kept as leaves.
    pub max_depth: Option<usize>,
}
