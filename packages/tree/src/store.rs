//! The read-only tree and its path lookup.

use std::path::Path as FsPath;
use std::sync::Arc;

use tracing::debug;

use crate::error::Error;
use crate::node::{Directory, Node};
use crate::path::Path;

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

lazy_static::lazy_static! {
    // Built once per process; every session shares the same tree.
    static ref PORTFOLIO: Arc<TreeStore> = Arc::new(
        TreeStore::from_json_str(PORTFOLIO_JSON).expect("built-in portfolio tree is valid")
    );
}

/// An immutable tree of directories and text leaves.
///
/// There are no mutating methods: once built, the tree only answers
/// lookups. Share it between sessions with an [`Arc`].
///
/// # Example
///
/// ```rust
/// use folio_tree::{path, Node, TreeStore};
///
/// let store = TreeStore::portfolio();
/// let node = store.resolve(&path!("projects/Inn")).unwrap();
/// assert_eq!(node, &Node::leaf("Text adventure game using C++ with modular structure."));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeStore {
    // Always `Node::Directory`; kept as a node so `resolve` can hand it out.
    root: Node,
}

impl TreeStore {
    /// Create a store around a root directory.
    pub fn new(root: Directory) -> Self {
        Self {
            root: Node::Directory(root),
        }
    }

    /// The built-in resume/projects tree.
    pub fn portfolio() -> Arc<TreeStore> {
        Arc::clone(&PORTFOLIO)
    }

    /// Parse a tree from JSON: objects are directories, strings are leaves.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        match serde_json::from_str::<Node>(json)? {
            Node::Directory(root) => Ok(Self::new(root)),
            Node::Leaf(_) => Err(Error::RootNotDirectory),
        }
    }

    /// Read and parse a JSON tree document from disk.
    pub fn from_json_file(path: impl AsRef<FsPath>) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!("Loading tree from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Walk `path` from the root.
    ///
    /// Every segment must name a child of a directory. A missing child, or
    /// a segment that would step into a leaf, fails with
    /// [`Error::NotFound`]. The empty path resolves to the root.
    pub fn resolve(&self, path: &Path) -> Result<&Node, Error> {
        let mut node = &self.root;
        for segment in path.iter() {
            let child = match node {
                Node::Directory(dir) => dir.get(segment),
                Node::Leaf(_) => None,
            };
            node = child.ok_or_else(|| Error::NotFound { path: path.clone() })?;
        }
        Ok(node)
    }

    /// Like [`resolve`](Self::resolve), but the target must be a directory.
    pub fn resolve_dir(&self, path: &Path) -> Result<&Directory, Error> {
        self.resolve(path)?
            .as_directory()
            .ok_or_else(|| Error::NotADirectory { path: path.clone() })
    }

    /// The root directory.
    pub fn root(&self) -> &Directory {
        match &self.root {
            Node::Directory(dir) => dir,
            Node::Leaf(_) => unreachable!("tree root is always a directory"),
        }
    }
}
