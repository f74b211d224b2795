//! Configuration types for the explorer

/// Configuration for exploration behavior.
#[derive(Debug, Clone, Default)]
pub struct ExplorerConfig {
    /// Recurse through symlinked directories. Off by default so link
    /// cycles cannot recurse forever; symlinked directories are still
    /// listed and counted.
    pub descend_symlinks: bool,
}
