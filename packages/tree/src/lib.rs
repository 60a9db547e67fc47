//! # folio-tree
//!
//! The read-only directory tree that the folio shell walks.
//!
//! A tree is made of [`Node`]s: a [`Directory`] holds uniquely named
//! children in declaration order, and a leaf holds a block of text. A
//! [`TreeStore`] wraps the root and resolves [`Path`]s against it. Stores
//! are built once, either from the built-in portfolio or from a JSON
//! document, and never change afterwards.
//!
//! ```rust
//! use folio_tree::{path, TreeStore};
//!
//! let store = TreeStore::portfolio();
//! let resume = store.resolve_dir(&path!("resume")).unwrap();
//! assert!(resume.contains("NMT CSE 113 Grader"));
//! ```

pub mod error;
pub mod node;
pub mod path;
pub mod store;

pub use error::Error;
pub use node::{Directory, Node};
pub use path::Path;
pub use store::TreeStore;
