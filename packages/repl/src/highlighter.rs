use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::commands::Verb;

/// Syntax highlighter for the shell
#[derive(Debug, Default)]
pub struct ReplHighlighter;

impl ReplHighlighter {
    pub fn new() -> Self {
        Self
    }
}

impl Highlighter for ReplHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if line.is_empty() {
            return styled;
        }

        // Leading whitespace is not part of the verb
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];
        if !indent.is_empty() {
            styled.push((Style::new(), indent.to_string()));
        }

        let (command, rest) = match trimmed.find(char::is_whitespace) {
            Some(pos) => (&trimmed[..pos], &trimmed[pos..]),
            None => (trimmed, ""),
        };

        let verb = Verb::parse(command);
        let cmd_style = match verb {
            Some(_) => Style::new().bold().fg(Color::Cyan),
            None => Style::new().fg(Color::Red),
        };
        styled.push((cmd_style, command.to_string()));

        if rest.is_empty() {
            return styled;
        }

        let arg_style = match verb {
            Some(Verb::Cd) => Style::new().fg(Color::Yellow),
            Some(Verb::Select) => Style::new().fg(Color::Green),
            _ => Style::new(),
        };
        styled.push((arg_style, rest.to_string()));

        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(line: &str) -> Vec<String> {
        ReplHighlighter::new()
            .highlight(line, 0)
            .buffer
            .into_iter()
            .map(|(_, text)| text)
            .collect()
    }

    #[test]
    fn empty_line_has_no_segments() {
        assert!(segments("").is_empty());
    }

    #[test]
    fn splits_verb_from_arguments() {
        assert_eq!(segments("cd ./resume"), vec!["cd", " ./resume"]);
        assert_eq!(segments("  ls"), vec!["  ", "ls"]);
    }

    #[test]
    fn known_and_unknown_verbs_differ() {
        let known = ReplHighlighter::new().highlight("SELECT Inn", 0);
        let unknown = ReplHighlighter::new().highlight("pick Inn", 0);
        assert_ne!(known.buffer[0].0, unknown.buffer[0].0);
    }

    #[test]
    fn text_is_preserved() {
        let line = "select   Donut Store";
        assert_eq!(segments(line).concat(), line);
    }
}
