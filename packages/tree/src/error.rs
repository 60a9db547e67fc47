//! Error types for tree lookup and construction.

use std::path::PathBuf;

use crate::path::Path;

/// Errors raised by [`TreeStore`](crate::TreeStore) lookups and loaders.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A segment is missing, or an intermediate node is a leaf.
    #[error("not found: /{path}")]
    NotFound { path: Path },

    /// The path resolved, but to a leaf where a directory was required.
    #[error("not a directory: /{path}")]
    NotADirectory { path: Path },

    /// Two siblings share a name.
    #[error("duplicate entry name: '{name}'")]
    DuplicateName { name: String },

    /// The document root is a leaf.
    #[error("tree root must be a directory")]
    RootNotDirectory,

    #[error("tree document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read tree file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
