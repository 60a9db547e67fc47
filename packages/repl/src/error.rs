//! Errors reported by shell verbs.
//!
//! None of these end a session. The REPL prints their `Display` text as
//! the command's output and keeps reading.

/// A failed command, carrying the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// `select` named something that is not in the current directory.
    #[error("select: {name} not found")]
    NotFound { name: String },

    /// `cd ./name` where `name` is missing or is not a directory.
    #[error("cd: {name}: No such directory")]
    InvalidTarget { name: String },

    /// `cd` with anything other than `..` or a `./` / `.\` relative name.
    #[error("cd: Invalid path")]
    InvalidPath,

    /// `select` named a directory.
    #[error("select: {name} is not a file")]
    NotAFile { name: String },

    #[error("Command not found: {verb}")]
    Unrecognized { verb: String },

    /// The current directory could not be resolved for `ls`.
    #[error("ls: Cannot access directory")]
    Inaccessible,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_shell_output() {
        let cases = [
            (
                CommandError::NotFound {
                    name: "Nope".to_string(),
                },
                "select: Nope not found",
            ),
            (
                CommandError::InvalidTarget {
                    name: "Inn".to_string(),
                },
                "cd: Inn: No such directory",
            ),
            (CommandError::InvalidPath, "cd: Invalid path"),
            (
                CommandError::NotAFile {
                    name: "resume".to_string(),
                },
                "select: resume is not a file",
            ),
            (
                CommandError::Unrecognized {
                    verb: "foo".to_string(),
                },
                "Command not found: foo",
            ),
            (CommandError::Inaccessible, "ls: Cannot access directory"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }
}
