//! Lexer (tokenizer) for the minimal C subset
//!
//! Converts raw source text into [`Token`]s on demand: the parser pulls one
//! token at a time through the [`TokenStream`](super::stream::TokenStream)
//! lookahead buffer rather than lexing the whole input up front. End of input
//! is signalled by `Ok(None)`, not by a sentinel token.

use super::ast::{PrimitiveType, SourceLocation};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Upper bound on the captured length of a single token. Exceeding it is a
/// lex error, never a silent truncation.
pub const MAX_TOKEN_LEN: usize = 1000;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Reserved type name, resolved to its primitive type by the lexer
    TypeKeyword(PrimitiveType, SourceLocation),
    /// Identifier, text verbatim
    Symbol(String, SourceLocation),
    /// Numeric literal, raw digit run; decoding is deferred to the parser
    Number(String, SourceLocation),
    Semicolon(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::TypeKeyword(_, loc)
            | Token::Symbol(_, loc)
            | Token::Number(_, loc)
            | Token::Semicolon(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::TypeKeyword(ty, _) => write!(f, "'{}'", ty.spelling()),
            Token::Symbol(s, _) => write!(f, "identifier '{}'", s),
            Token::Number(s, _) => write!(f, "number '{}'", s),
            Token::Semicolon(_) => write!(f, "';'"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Error)]
#[error("{file}: lex error at {location}: {message}")]
pub struct LexError {
    pub file: String,
    pub message: String,
    pub location: SourceLocation,
}

/// On-demand lexer over a single named source text.
///
/// The file name is threaded in explicitly and carried on every error; there
/// is no process-global "current file" state.
pub struct Lexer {
    file: String,
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    keywords: FxHashMap<&'static str, PrimitiveType>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(file: &str, input: &str) -> Self {
        let mut keywords = FxHashMap::default();
        keywords.insert("int", PrimitiveType::Int);

        Self {
            file: file.to_string(),
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            keywords,
        }
    }

    /// Produce the next token, or `Ok(None)` once the input is exhausted.
    ///
    /// Skips leading whitespace, then dispatches on a single lookahead
    /// character to pick the token class and consumes a maximal run of
    /// characters belonging to it.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let loc = self.current_location();
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(None),
        };

        match ch {
            ';' => {
                self.advance();
                Ok(Some(Token::Semicolon(loc)))
            }
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(loc).map(Some),
            '0'..='9' => self.number_literal(loc).map(Some),
            _ => Err(self.error_at(loc, format!("unexpected character '{}'", ch))),
        }
    }

    /// Lex identifier or reserved type keyword
    fn identifier_or_keyword(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut ident = String::new();

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphanumeric() && ch != '_' {
                break;
            }
            if ident.len() == MAX_TOKEN_LEN {
                return Err(self.error_at(loc, "identifier too long".to_string()));
            }
            ident.push(ch);
            self.advance();
        }

        match self.keywords.get(ident.as_str()) {
            Some(&ty) => Ok(Token::TypeKeyword(ty, loc)),
            None => Ok(Token::Symbol(ident, loc)),
        }
    }

    /// Lex numeric literal (a run of decimal digits, kept as raw text)
    fn number_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut num_str = String::new();

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            if num_str.len() == MAX_TOKEN_LEN {
                return Err(self.error_at(loc, "numeric literal too long".to_string()));
            }
            num_str.push(ch);
            self.advance();
        }

        Ok(Token::Number(num_str, loc))
    }

    /// Skip a maximal run of whitespace
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    pub(crate) fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Name of the source file this lexer was constructed over
    pub(crate) fn file(&self) -> &str {
        &self.file
    }

    fn error_at(&self, location: SourceLocation, message: String) -> LexError {
        LexError {
            file: self.file.clone(),
            message,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new("test.c", source);
        let mut tokens = Vec::new();
        while let Some(tok) = lexer.next_token().unwrap() {
            tokens.push(tok);
        }
        tokens
    }

    #[test]
    fn test_declaration_tokens() {
        let tokens = lex_all("int x;");

        assert!(matches!(tokens[0], Token::TypeKeyword(PrimitiveType::Int, _)));
        assert!(matches!(tokens[1], Token::Symbol(ref s, _) if s == "x"));
        assert!(matches!(tokens[2], Token::Semicolon(_)));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_number_keeps_raw_text() {
        let tokens = lex_all("042;");

        assert!(matches!(tokens[0], Token::Number(ref s, _) if s == "042"));
        assert!(matches!(tokens[1], Token::Semicolon(_)));
    }

    #[test]
    fn test_underscore_identifier() {
        let tokens = lex_all("_foo_1");

        assert!(matches!(tokens[0], Token::Symbol(ref s, _) if s == "_foo_1"));
    }

    #[test]
    fn test_non_keyword_type_name_is_symbol() {
        let tokens = lex_all("float");

        assert!(matches!(tokens[0], Token::Symbol(ref s, _) if s == "float"));
    }

    #[test]
    fn test_whitespace_only_is_exhausted() {
        let mut lexer = Lexer::new("test.c", "  \t\n  ");
        assert!(lexer.next_token().unwrap().is_none());
        // exhaustion is stable across repeated calls
        assert!(lexer.next_token().unwrap().is_none());
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = Lexer::new("test.c", "int x @;");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();

        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains('@'));
        assert_eq!(err.file, "test.c");
    }

    #[test]
    fn test_locations_track_lines_and_columns() {
        let tokens = lex_all("int a;\n  b;");

        assert_eq!(tokens[0].location(), SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location(), SourceLocation::new(1, 5));
        assert_eq!(tokens[2].location(), SourceLocation::new(1, 6));
        assert_eq!(tokens[3].location(), SourceLocation::new(2, 3));
    }

    #[test]
    fn test_identifier_too_long() {
        let source = "a".repeat(MAX_TOKEN_LEN + 1);
        let mut lexer = Lexer::new("test.c", &source);

        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("too long"));
    }

    #[test]
    fn test_identifier_at_limit_is_fine() {
        let source = "a".repeat(MAX_TOKEN_LEN);
        let mut lexer = Lexer::new("test.c", &source);

        let tok = lexer.next_token().unwrap().unwrap();
        assert!(matches!(tok, Token::Symbol(ref s, _) if s.len() == MAX_TOKEN_LEN));
    }

    #[test]
    fn test_number_too_long() {
        let source = "1".repeat(MAX_TOKEN_LEN + 1);
        let mut lexer = Lexer::new("test.c", &source);

        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("too long"));
    }
}
