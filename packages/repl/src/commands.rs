//! Shell command parsing and execution.
//!
//! Commands:
//! - `ls` - List the current directory
//! - `cd ./<dir>` / `cd .\<dir>` - Enter a child directory
//! - `cd ..` - Go up one level
//! - `select <item>` - Print the text of an item in the current directory
//! - `clear` - Clear the screen
//! - `help` - Show help
//!
//! Verbs are case-insensitive. Arguments are whitespace-separated words
//! rejoined with single spaces, so `select  SWE   Casino` selects
//! `SWE Casino`. There is no quoting or escaping. A blank line counts as an
//! unknown (empty) verb.

use std::fmt;

use tracing::debug;

use crate::error::CommandError;
use crate::session::Session;

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command succeeded, optionally with output to display
    Ok { display: Option<String> },
    /// Command failed; the error's message is shown as output
    Error(CommandError),
    /// Clear the output surface
    Clear,
    /// Show help
    Help,
}

impl CommandResult {
    /// Create a simple Ok result with display text
    fn ok_display(display: impl Into<String>) -> Self {
        CommandResult::Ok {
            display: Some(display.into()),
        }
    }

    /// Create an Ok result with no output
    fn ok_none() -> Self {
        CommandResult::Ok { display: None }
    }

    /// The text this result prints, if any.
    pub fn text(&self) -> Option<String> {
        match self {
            CommandResult::Ok { display } => display.clone(),
            CommandResult::Error(e) => Some(e.to_string()),
            CommandResult::Help => Some(HELP_TEXT.to_string()),
            CommandResult::Clear => None,
        }
    }
}

impl From<Result<String, CommandError>> for CommandResult {
    fn from(result: Result<String, CommandError>) -> Self {
        match result {
            Ok(display) => CommandResult::ok_display(display),
            Err(e) => CommandResult::Error(e),
        }
    }
}

/// The fixed set of recognized verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Ls,
    Cd,
    Select,
    Clear,
    Help,
}

impl Verb {
    pub const ALL: [Verb; 5] = [Verb::Ls, Verb::Cd, Verb::Select, Verb::Clear, Verb::Help];

    /// Match a verb case-insensitively.
    pub fn parse(word: &str) -> Option<Verb> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.name().eq_ignore_ascii_case(word))
    }

    pub fn name(self) -> &'static str {
        match self {
            Verb::Ls => "ls",
            Verb::Cd => "cd",
            Verb::Select => "select",
            Verb::Clear => "clear",
            Verb::Help => "help",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Usage text printed by `help`.
pub const HELP_TEXT: &str = "Available commands:
- ls
- cd ./<dir>
- cd ..
- select <item>
- clear
- help";

/// Parse and execute a command
pub fn execute(input: &str, session: &mut Session) -> CommandResult {
    let mut words = input.split_whitespace();

    // A blank line is an empty, unrecognized verb
    let command = words.next().unwrap_or_default();
    let args = words.collect::<Vec<_>>().join(" ");

    let Some(verb) = Verb::parse(command) else {
        debug!(command, "unrecognized command");
        return CommandResult::Error(CommandError::Unrecognized {
            verb: command.to_string(),
        });
    };

    debug!(%verb, args = %args, path = %session.current_path(), "executing");
    match verb {
        Verb::Ls => session.list().into(),
        Verb::Cd => cmd_cd(&args, session),
        Verb::Select => cmd_select(&args, session),
        Verb::Clear => CommandResult::Clear,
        Verb::Help => CommandResult::Help,
    }
}

/// Format help text
pub fn format_help() -> String {
    HELP_TEXT.to_string()
}

fn cmd_cd(args: &str, session: &mut Session) -> CommandResult {
    match session.change_directory(args) {
        Ok(()) => CommandResult::ok_none(),
        Err(e) => CommandResult::Error(e),
    }
}

fn cmd_select(args: &str, session: &Session) -> CommandResult {
    session.select(args).map(str::to_string).into()
}
