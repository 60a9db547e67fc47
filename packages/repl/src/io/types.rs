//! I/O types for the shell.
//!
//! These types define the interface between the REPL core and its host
//! environment.

/// A line of input from the user.
#[derive(Debug, Clone)]
pub struct InputLine {
    pub line: String,
}

/// A signal from the host (Ctrl+C, Ctrl+D, etc.).
#[derive(Debug, Clone)]
pub enum Signal {
    /// User pressed Ctrl+C (interrupt).
    Interrupt,
    /// User pressed Ctrl+D (end of file).
    Eof,
}

/// Output to be written by the shell.
#[derive(Debug, Clone)]
pub struct Output {
    pub text: String,
    pub style: OutputStyle,
}

impl Output {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Normal,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Error,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Info,
        }
    }

    pub fn banner(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Banner,
        }
    }
}

/// Style hint for output rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Command output: listings, item text, help.
    #[default]
    Normal,
    /// Failed command message. Rendered like normal output, but hosts may tint it.
    Error,
    /// Informational message (host may style in cyan).
    Info,
    /// Banner/startup message.
    Banner,
}

/// Prompt configuration sent from core to host.
#[derive(Debug, Clone, Default)]
pub struct PromptConfig {
    /// Full prompt text, e.g. `PS C:\Terminal\resume>`.
    pub prompt: String,
    /// Current path, `/`-separated, empty at the root.
    pub current_path: String,
}

/// Reason the shell loop exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// User pressed Ctrl+D.
    Eof,
    /// The host ran out of input.
    InputClosed,
}
