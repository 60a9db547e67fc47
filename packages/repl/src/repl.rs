//! Platform-independent shell core.
//!
//! This module contains the main loop, which interacts only through the
//! `IoHost` trait. The same core drives the terminal host, an in-memory test
//! host, or any event-driven host that feeds it one line at a time through
//! [`ReplCore::handle_line`].

use std::sync::Arc;

use folio_tree::TreeStore;
use tracing::{debug, info};

use crate::commands::{self, CommandResult};
use crate::config::ReplConfig;
use crate::host::TerminalHost;
use crate::io::{ExitReason, IoError, IoHost, Output, PromptConfig, Signal};
use crate::prompt::format_prompt;
use crate::session::Session;

/// Errors that stop [`run`] before or during the session.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to load tree: {0}")]
    Tree(#[from] folio_tree::Error),

    #[error("failed to start terminal: {0}")]
    Terminal(#[source] std::io::Error),

    #[error(transparent)]
    Io(#[from] IoError),
}

/// The platform-independent shell core.
pub struct ReplCore {
    session: Session,
}

impl ReplCore {
    /// Create a core browsing `tree` from its root.
    pub fn new(tree: Arc<TreeStore>) -> Self {
        Self::with_session(Session::new(tree))
    }

    /// Create a core around an existing session.
    pub fn with_session(session: Session) -> Self {
        Self { session }
    }

    /// Run the shell loop, reading/writing through the provided I/O host.
    ///
    /// Returns the reason for exiting (EOF, or the host running dry).
    pub fn run(&mut self, io: &mut impl IoHost) -> Result<ExitReason, IoError> {
        self.write_banner(io)?;

        loop {
            self.update_prompt(io)?;

            if !io.is_open() {
                io.flush()?;
                return Ok(ExitReason::InputClosed);
            }

            io.wait_for_input()?;

            if let Some(signal) = io.read_signal()? {
                match signal {
                    Signal::Eof => {
                        io.write_output(Output::info("Goodbye!"))?;
                        io.flush()?;
                        return Ok(ExitReason::Eof);
                    }
                    Signal::Interrupt => {
                        io.write_output(Output::info("^C (press Ctrl+D to quit)"))?;
                        continue;
                    }
                }
            }

            let input = match io.read_input()? {
                Some(input) => input,
                None => continue,
            };

            self.handle_line(&input.line, io)?;
        }
    }

    /// Execute one submitted line and route its result to the host.
    pub fn handle_line(&mut self, line: &str, io: &mut impl IoHost) -> Result<(), IoError> {
        let result = commands::execute(line, &mut self.session);

        match result {
            CommandResult::Ok { display: None } => {}
            CommandResult::Ok {
                display: Some(output),
            } => {
                io.write_output(Output::normal(output))?;
            }
            CommandResult::Error(e) => {
                io.write_output(Output::error(e.to_string()))?;
            }
            CommandResult::Help => {
                io.write_output(Output::normal(commands::format_help()))?;
            }
            CommandResult::Clear => {
                debug!("clearing output");
                io.clear()?;
            }
        }

        io.flush()
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn write_banner(&self, io: &mut impl IoHost) -> Result<(), IoError> {
        io.write_output(Output::banner(BANNER))
    }

    fn update_prompt(&self, io: &mut impl IoHost) -> Result<(), IoError> {
        let path = self.session.current_path();

        io.write_prompt(PromptConfig {
            prompt: format_prompt(path),
            current_path: path.to_string(),
        })
    }
}

/// Load the configured tree and run an interactive terminal session.
pub fn run(config: &ReplConfig) -> Result<ExitReason, RunError> {
    let tree = config.load_tree()?;
    let session = match config.seed {
        Some(seed) => Session::with_seed(tree, seed),
        None => Session::new(tree),
    };

    let mut host = TerminalHost::new(config).map_err(RunError::Terminal)?;
    info!("Starting shell");
    let reason = ReplCore::with_session(session).run(&mut host)?;
    info!(?reason, "Shell exited");
    Ok(reason)
}

const BANNER: &str = r#"
  __       _ _
 / _| ___ | (_) ___
| |_ / _ \| | |/ _ \
|  _| (_) | | | (_) |
|_|  \___/|_|_|\___/

Type 'help' for available commands.
"#;
