//! # folio-repl
//!
//! A tiny PowerShell-flavoured shell for browsing a [`folio_tree`] tree.
//!
//! The shell knows five verbs: `ls`, `cd`, `select`, `clear` and `help`.
//! All state lives in a [`Session`]; the [`ReplCore`] loop talks to the
//! outside world only through the [`io::IoHost`] trait, so the same core
//! runs in a terminal or against a scripted host under test.
//!
//! ## Usage
//!
//! ```bash
//! folio
//!
//! # Inside the shell:
//! PS C:\Terminal> ls
//! PS C:\Terminal> cd ./projects
//! PS C:\Terminal\projects> select Aeroscape
//! PS C:\Terminal\projects> cd ..
//! ```
//!
//! Driving a session directly:
//!
//! ```rust
//! use folio_repl::{commands, Session};
//! use folio_tree::TreeStore;
//!
//! let mut session = Session::new(TreeStore::portfolio());
//! commands::execute("cd ./resume", &mut session);
//! let result = commands::execute("select NMT CSE 113 Grader", &mut session);
//! assert_eq!(
//!     result.text().as_deref(),
//!     Some("Graded assignments, ensured consistency, gave feedback, collaborated with instructor.")
//! );
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod glitch;
pub mod highlighter;
pub mod host;
pub mod io;
pub mod listing;
pub mod logging;
pub mod prompt;
pub mod repl;
pub mod session;

pub use commands::{execute, CommandResult, Verb};
pub use config::{Args, ReplConfig};
pub use error::CommandError;
pub use repl::{run, ReplCore, RunError};
pub use session::Session;
