//! Lexer for tokenizing shell input.
//!
//! Handles:
//! - Word tokenization on spaces (runs of spaces collapse)
//! - Double-quoted spans, which may contain spaces and are glued onto the
//!   surrounding word: `a"b c"d` is the single token `ab cd`
//! - Unterminated quotes, reported as [`ParseError::UnterminatedQuote`]

use crate::error::ParseError;

const SPACE: char = ' ';
const QUOTE: char = '"';

// =============================================================================
// Lexer
// =============================================================================

/// Lexer for tokenizing shell input.
///
/// Yields one `Ok(token)` per word. On an unterminated quote it yields a
/// single `Err` and is exhausted afterwards.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Tokenize the entire input into a vector.
    ///
    /// Fails as a whole if any quote is left open, so a bad line never
    /// produces a partial token list.
    pub fn tokenize(self) -> Result<Vec<String>, ParseError> {
        self.collect()
    }

    fn skip_spaces(&mut self) {
        while self.current_char() == Some(SPACE) {
            self.pos += SPACE.len_utf8();
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Read one token starting at the current position.
    ///
    /// Returns an empty string when the word consisted only of empty quotes
    /// (`""`); the caller drops those.
    fn read_token(&mut self) -> Result<String, ParseError> {
        let mut token = String::new();

        while let Some(c) = self.current_char() {
            match c {
                SPACE => break,
                QUOTE => token.push_str(self.read_quoted()?),
                _ => {
                    token.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }

        Ok(token)
    }

    /// Consume a quoted span and return its content without the quotes.
    fn read_quoted(&mut self) -> Result<&'a str, ParseError> {
        let input = self.input;
        let open = self.pos;
        let start = open + QUOTE.len_utf8();

        match input[start..].find(QUOTE) {
            Some(len) => {
                self.pos = start + len + QUOTE.len_utf8();
                Ok(&input[start..start + len])
            }
            None => Err(ParseError::UnterminatedQuote {
                position: input[..open].chars().count(),
            }),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<String, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            self.skip_spaces();
            if self.pos >= self.input.len() {
                return None;
            }

            match self.read_token() {
                Ok(token) if token.is_empty() => continue,
                Ok(token) => return Some(Ok(token)),
                Err(err) => {
                    self.failed = true;
                    self.pos = self.input.len();
                    return Some(Err(err));
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn words(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simple_command() {
        let tokens = Lexer::new("ls").tokenize();
        assert_eq!(tokens, Ok(words(&["ls"])));
    }

    #[test]
    fn test_command_with_args() {
        let tokens = Lexer::new("mkdir docs").tokenize();
        assert_eq!(tokens, Ok(words(&["mkdir", "docs"])));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Lexer::new("").tokenize(), Ok(vec![]));
        assert_eq!(Lexer::new("    ").tokenize(), Ok(vec![]));
    }

    #[test]
    fn test_spaces_collapse() {
        let tokens = Lexer::new("  cd    docs   ").tokenize();
        assert_eq!(tokens, Ok(words(&["cd", "docs"])));
    }

    #[test]
    fn test_only_space_separates() {
        let tokens = Lexer::new("cd\tdocs").tokenize();
        assert_eq!(tokens, Ok(words(&["cd\tdocs"])));
    }

    #[test]
    fn test_double_quotes() {
        let tokens = Lexer::new("cd \"My Documents\"").tokenize();
        assert_eq!(tokens, Ok(words(&["cd", "My Documents"])));
    }

    #[test]
    fn test_quotes_inside_word() {
        let tokens = Lexer::new("cd /Users/\"Awesome Directory\"/Test").tokenize();
        assert_eq!(tokens, Ok(words(&["cd", "/Users/Awesome Directory/Test"])));
    }

    #[test]
    fn test_adjacent_quoted_spans() {
        let tokens = Lexer::new("\"a b\"\"c d\"").tokenize();
        assert_eq!(tokens, Ok(words(&["a bc d"])));
    }

    #[test]
    fn test_empty_quotes_are_dropped() {
        let tokens = Lexer::new("create \"\" x").tokenize();
        assert_eq!(tokens, Ok(words(&["create", "x"])));
    }

    #[test]
    fn test_unicode_words() {
        let tokens = Lexer::new("cd \"Área de Trabalho\" ünï").tokenize();
        assert_eq!(tokens, Ok(words(&["cd", "Área de Trabalho", "ünï"])));
    }

    #[test]
    fn test_unterminated_quote() {
        let tokens = Lexer::new("mkdir \"a b").tokenize();
        assert_eq!(tokens, Err(ParseError::UnterminatedQuote { position: 6 }));
    }

    #[test]
    fn test_unterminated_quote_after_balanced() {
        let tokens = Lexer::new("\"ok\" \"broken").tokenize();
        assert_eq!(tokens, Err(ParseError::UnterminatedQuote { position: 5 }));
    }

    #[test]
    fn test_unterminated_quote_counts_characters() {
        let tokens = Lexer::new("cd Área \"x").tokenize();
        assert_eq!(tokens, Err(ParseError::UnterminatedQuote { position: 8 }));
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut lexer = Lexer::new("cd \"oops");
        assert_eq!(lexer.next(), Some(Ok("cd".to_string())));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_lexer_iterator_take() {
        let lexer = Lexer::new("a b c d e");
        let first_two: Vec<_> = lexer.take(2).collect();
        assert_eq!(first_two, vec![Ok("a".to_string()), Ok("b".to_string())]);
    }
}
