//! Single-slot token lookahead over the [`Lexer`]
//!
//! The parser decides between grammar alternatives by peeking at one upcoming
//! token; this buffer is that mechanism. At most one token is ever cached, and
//! a `peek` followed by `shift` returns the identical token without re-lexing.

use super::ast::SourceLocation;
use super::lexer::{LexError, Lexer, Token};

/// A lexer plus a one-token lookahead slot.
pub struct TokenStream {
    lexer: Lexer,
    buffered: Option<Token>,
}

impl TokenStream {
    pub fn new(lexer: Lexer) -> Self {
        Self {
            lexer,
            buffered: None,
        }
    }

    /// Return the next token without consuming it, or `Ok(None)` at end of
    /// input. Fills the lookahead slot from the lexer if it is empty.
    pub fn peek(&mut self) -> Result<Option<&Token>, LexError> {
        if self.buffered.is_none() {
            self.buffered = self.lexer.next_token()?;
        }
        Ok(self.buffered.as_ref())
    }

    /// Consume and return the next token, or `Ok(None)` at end of input.
    /// Drains the lookahead slot first; lexes fresh only when it is empty.
    pub fn shift(&mut self) -> Result<Option<Token>, LexError> {
        match self.buffered.take() {
            Some(tok) => Ok(Some(tok)),
            None => self.lexer.next_token(),
        }
    }

    /// Name of the underlying source file, for error reporting
    pub(crate) fn file(&self) -> &str {
        self.lexer.file()
    }

    /// Location of the lexer cursor; used to locate end-of-input errors
    pub(crate) fn current_location(&self) -> SourceLocation {
        self.lexer.current_location()
    }
}
