//! Per-session state: the tree being browsed and the current directory.
//!
//! The tree itself is shared and read-only. A session owns only its path
//! stack and the RNG used for cosmetic listing metadata, so several
//! sessions can browse the same tree independently.

use std::sync::Arc;

use folio_tree::{Directory, Node, Path, TreeStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::CommandError;
use crate::listing;

/// The token that moves one level up.
const PARENT: &str = "..";

/// Prefixes accepted for a relative child name.
const RELATIVE_PREFIXES: [&str; 2] = ["./", ".\\"];

/// One interactive session over a tree.
pub struct Session {
    tree: Arc<TreeStore>,
    current_path: Path,
    rng: StdRng,
}

impl Session {
    /// Start at the root of `tree`.
    pub fn new(tree: Arc<TreeStore>) -> Self {
        Self {
            tree,
            current_path: Path::root(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Start at the root with a fixed seed for listing metadata.
    pub fn with_seed(tree: Arc<TreeStore>, seed: u64) -> Self {
        Self {
            tree,
            current_path: Path::root(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The directory chain from the root to the current location.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// The current directory node.
    pub fn current_dir(&self) -> Result<&Directory, folio_tree::Error> {
        self.tree.resolve_dir(&self.current_path)
    }

    /// Apply a `cd` target.
    ///
    /// Only two forms are understood: `..` steps up one level (and does
    /// nothing at the root), and `./name` or `.\name` steps into the child
    /// directory `name`. Everything after the two-character prefix is one
    /// literal name, so `./a/b` looks for a child called `a/b`. On error
    /// the current path is left as it was.
    pub fn change_directory(&mut self, target: &str) -> Result<(), CommandError> {
        if target == PARENT {
            if self.current_path.pop().is_none() {
                debug!("cd .. at root");
            }
            return Ok(());
        }

        let name = RELATIVE_PREFIXES
            .iter()
            .find_map(|prefix| target.strip_prefix(*prefix))
            .ok_or(CommandError::InvalidPath)?;

        let is_child_dir = self
            .current_dir()
            .ok()
            .and_then(|dir| dir.get(name))
            .is_some_and(Node::is_directory);
        if !is_child_dir {
            return Err(CommandError::InvalidTarget {
                name: name.to_string(),
            });
        }

        self.current_path.push(name);
        debug!(path = %self.current_path, "changed directory");
        Ok(())
    }

    /// The text of leaf `name` in the current directory.
    pub fn select(&self, name: &str) -> Result<&str, CommandError> {
        let node = self
            .current_dir()
            .ok()
            .and_then(|dir| dir.get(name))
            .ok_or_else(|| CommandError::NotFound {
                name: name.to_string(),
            })?;

        node.as_leaf().ok_or_else(|| CommandError::NotAFile {
            name: name.to_string(),
        })
    }

    /// The `ls` table for the current directory.
    pub fn list(&mut self) -> Result<String, CommandError> {
        let dir = self
            .tree
            .resolve_dir(&self.current_path)
            .map_err(|_| CommandError::Inaccessible)?;
        Ok(listing::format_listing(&self.current_path, dir, &mut self.rng))
    }
}
