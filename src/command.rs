//! Command line format.
//!
//! ```text
//! ADD type=shift owner=Alice text=Hello shift=3
//! ADD type=substitution owner=Bob text=Secret source=abc target=xyz
//! REM shift>5
//! PRINT
//! ```
//!
//! - Lines are split on runs of whitespace.
//! - The first token selects the command; command words are case-sensitive.
//! - Lines with any other first token, and blank lines, are skipped.

use crate::args::{Args, parse_args};

/// Parsed interpreter command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ADD key=value ...
    Add { args: Args },
    /// REM condition
    Rem { condition: Option<String> },
    /// PRINT
    Print,
}

impl Command {
    /// Command word, for logs and traces.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "ADD",
            Command::Rem { .. } => "REM",
            Command::Print => "PRINT",
        }
    }
}

/// Split a line into whitespace-delimited tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse a tokenized command. Returns `None` for unrecognized commands.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Command> {
    let (head, rest) = tokens.split_first()?;
    match head.as_ref() {
        "ADD" => Some(Command::Add {
            args: parse_args(rest),
        }),
        // Only the first argument is the condition; anything after it is ignored.
        "REM" => Some(Command::Rem {
            condition: rest.first().map(|c| c.as_ref().to_string()),
        }),
        "PRINT" => Some(Command::Print),
        _ => None,
    }
}

/// Parse a single line of input.
pub fn parse_line(line: &str) -> Option<Command> {
    parse_tokens(&tokenize(line))
}

/// Parse every recognized command in `text`, with its 1-based line number.
pub fn parse_commands(text: &str) -> Vec<(usize, Command)> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line).map(|cmd| (idx + 1, cmd)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(
            tokenize("  ADD\ttype=shift   owner=A \r"),
            vec!["ADD", "type=shift", "owner=A"]
        );
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_parse_add() {
        match parse_line("ADD type=shift owner=A text=B shift=2").unwrap() {
            Command::Add { args } => {
                assert_eq!(args.len(), 4);
                assert_eq!(args.get("shift").map(String::as_str), Some("2"));
            }
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rem() {
        assert_eq!(
            parse_line("REM shift>5").unwrap(),
            Command::Rem {
                condition: Some("shift>5".to_string())
            }
        );
        assert_eq!(
            parse_line("REM owner=A extra").unwrap(),
            Command::Rem {
                condition: Some("owner=A".to_string())
            }
        );
    }

    #[test]
    fn test_parse_rem_without_condition() {
        assert_eq!(parse_line("REM").unwrap(), Command::Rem { condition: None });
    }

    #[test]
    fn test_parse_print() {
        assert_eq!(parse_line("PRINT").unwrap(), Command::Print);
        assert_eq!(parse_line("PRINT\n").unwrap(), Command::Print);
    }

    #[test]
    fn test_unknown_and_blank_lines_are_skipped() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("print"), None);
        assert_eq!(parse_line("DELETE owner=A"), None);
        assert_eq!(parse_line("# comment"), None);
    }

    #[test]
    fn test_parse_commands_keeps_line_numbers() {
        let text = "ADD type=shift owner=A text=B shift=1\n\nNOPE\nPRINT\n";
        let commands = parse_commands(text);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].0, 1);
        assert_eq!(commands[1], (4, Command::Print));
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::Print.name(), "PRINT");
        assert_eq!(Command::Rem { condition: None }.name(), "REM");
    }
}
