//! Command line parser.
//!
//! Splits one input line into lexemes with [`Lexer`], then reads the first
//! lexeme as a [`Command`] and the rest as its arguments.

mod lexer;

pub use lexer::Lexer;

use crate::command::Command;
use crate::error::ParseError;

// =============================================================================
// Parsed Command
// =============================================================================

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The command word exactly as typed
    pub name: String,
    /// Command the word resolved to (`Invalid` if unknown)
    pub command: Command,
    /// Arguments in input order
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Build from a non-empty lexeme sequence.
    fn from_lexemes(mut lexemes: Vec<String>) -> Option<Self> {
        if lexemes.is_empty() {
            return None;
        }
        let args = lexemes.split_off(1);
        let name = lexemes.swap_remove(0);
        Some(Self {
            command: Command::from_word(&name),
            name,
            args,
        })
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Split a line into lexemes.
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    Lexer::new(input).tokenize()
}

/// Parse a line into a command and its arguments.
///
/// Returns `Ok(None)` for a blank line. An unknown command word is not an
/// error here: it parses to [`Command::Invalid`].
pub fn parse_input(input: &str) -> Result<Option<ParsedCommand>, ParseError> {
    let lexemes = tokenize(input)?;
    log::debug!("tokenized {:?} into {:?}", input, lexemes);
    Ok(ParsedCommand::from_lexemes(lexemes))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_parse_cd_quoted() {
        let parsed = parse_input("cd \"My Documents\"").unwrap().unwrap();
        assert_eq!(parsed.name, "cd");
        assert_eq!(parsed.command, Command::ChangeDir);
        assert_eq!(parsed.args, vec!["My Documents"]);
    }

    #[test]
    fn test_parse_no_args() {
        let parsed = parse_input("LS").unwrap().unwrap();
        assert_eq!(parsed.command, Command::List);
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_input(""), Ok(None));
        assert_eq!(parse_input("   "), Ok(None));
    }

    #[test]
    fn test_parse_unknown_command() {
        let parsed = parse_input("frobnicate now").unwrap().unwrap();
        assert_eq!(parsed.command, Command::Invalid);
        assert_eq!(parsed.name, "frobnicate");
        assert_eq!(parsed.args, vec!["now"]);
    }

    #[test]
    fn test_parse_unterminated_quote() {
        assert_eq!(
            parse_input("mkdir \"a b"),
            Err(ParseError::UnterminatedQuote { position: 6 })
        );
    }

    #[test]
    fn test_quoted_command_word() {
        let parsed = parse_input("\"help\" ls").unwrap().unwrap();
        assert_eq!(parsed.command, Command::Help);
        assert_eq!(parsed.args, vec!["ls"]);
    }

    /// Quote a token for re-joining if it contains a space.
    fn requote(token: &str) -> String {
        if token.contains(' ') {
            format!("\"{}\"", token)
        } else {
            token.to_string()
        }
    }

    #[quickcheck]
    fn prop_rejoin_reproduces_tokens(words: Vec<String>) -> bool {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.replace('"', ""))
            .filter(|w| !w.is_empty())
            .collect();
        let line = words.iter().map(|w| requote(w)).collect::<Vec<_>>().join(" ");

        // A word made only of spaces survives as one quoted token.
        tokenize(&line) == Ok(words)
    }

    #[quickcheck]
    fn prop_tokenize_then_rejoin_is_stable(line: String) -> TestResult {
        let Ok(tokens) = tokenize(&line) else {
            return TestResult::discard();
        };
        let rejoined = tokens.iter().map(|t| requote(t)).collect::<Vec<_>>().join(" ");
        TestResult::from_bool(tokenize(&rejoined) == Ok(tokens))
    }

    #[quickcheck]
    fn prop_unmatched_quote_fails(before: String, after: String) -> bool {
        let before = before.replace('"', "");
        let after = after.replace('"', "");
        let line = format!("{}\"{}", before, after);
        tokenize(&line)
            == Err(ParseError::UnterminatedQuote {
                position: before.chars().count(),
            })
    }
}
