//! Recursive-descent parser for the minimal C subset
//!
//! One method per grammar production:
//!
//! ```text
//! program     := statement*
//! statement   := (declaration | expression) ';'
//! declaration := type_ref symbol
//! type_ref    := "int"
//! expression  := symbol | number
//! ```
//!
//! The grammar needs exactly one token of lookahead: `parse_statement` peeks
//! one token and commits to a declaration if it is a type keyword, otherwise
//! to an expression statement. There is no error recovery; the first mismatch
//! aborts the parse.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use crate::parser::stream::TokenStream;
use thiserror::Error;

/// Parser error type
#[derive(Debug, Error)]
#[error("{file}: parse error at {location}: {message}")]
pub struct ParseError {
    pub file: String,
    pub message: String,
    pub location: SourceLocation,
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            file: err.file,
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser over a [`TokenStream`]
pub struct Parser {
    tokens: TokenStream,
}

impl Parser {
    pub fn new(file: &str, source: &str) -> Self {
        Self {
            tokens: TokenStream::new(Lexer::new(file, source)),
        }
    }

    /// Parse the entire program: zero or more statements up to end of input.
    ///
    /// An empty or whitespace-only source is a valid program with no
    /// statements, not an error.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while self.tokens.peek()?.is_some() {
            program.statements.push(self.parse_statement()?);
        }

        Ok(program)
    }

    /// statement := (declaration | expression) ';'
    ///
    /// A leading type keyword selects the declaration production; any other
    /// token is parsed as an expression statement. An unknown type name such
    /// as `float` therefore lexes as a plain identifier and becomes an
    /// expression statement, failing afterwards on the missing `;`.
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let is_declaration = matches!(self.tokens.peek()?, Some(Token::TypeKeyword(..)));

        let stmt = if is_declaration {
            Statement::Declaration(self.parse_declaration()?)
        } else {
            Statement::Expression(self.parse_expression()?)
        };

        self.expect_semicolon()?;
        Ok(stmt)
    }

    /// declaration := type_ref symbol
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let ty = self.parse_type_ref()?;
        let name = self.parse_symbol()?;
        let location = ty.location;

        Ok(Declaration { ty, name, location })
    }

    /// type_ref := "int"
    fn parse_type_ref(&mut self) -> Result<TypeRef, ParseError> {
        match self.tokens.shift()? {
            Some(Token::TypeKeyword(ty, location)) => Ok(TypeRef { ty, location }),
            found => Err(self.mismatch("type keyword", found)),
        }
    }

    fn parse_symbol(&mut self) -> Result<Symbol, ParseError> {
        match self.tokens.shift()? {
            Some(Token::Symbol(name, location)) => Ok(Symbol { name, location }),
            found => Err(self.mismatch("identifier", found)),
        }
    }

    /// expression := symbol | number
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        match self.tokens.shift()? {
            Some(Token::Symbol(name, location)) => Ok(Expr::Symbol(name, location)),
            Some(Token::Number(text, location)) => {
                let value = self.decode_number(&text, location)?;
                Ok(Expr::Number(value, location))
            }
            found => Err(self.mismatch("expression", found)),
        }
    }

    fn expect_semicolon(&mut self) -> Result<(), ParseError> {
        match self.tokens.shift()? {
            Some(Token::Semicolon(_)) => Ok(()),
            found => Err(self.mismatch("';'", found)),
        }
    }

    /// Decode a numeric literal's raw digit run into its value.
    ///
    /// C base detection: a leading `0` with further digits means octal,
    /// anything else is decimal. The lexer guarantees the text is a non-empty
    /// run of decimal digits, so the only failures left are a digit invalid
    /// for the detected base (`8`/`9` in octal) and overflow.
    fn decode_number(
        &self,
        text: &str,
        location: SourceLocation,
    ) -> Result<i64, ParseError> {
        if text.len() > 1 && text.starts_with('0') {
            i64::from_str_radix(&text[1..], 8).map_err(|_| {
                self.error_at(location, format!("invalid octal literal '{}'", text))
            })
        } else {
            text.parse::<i64>().map_err(|_| {
                self.error_at(
                    location,
                    format!("integer literal '{}' out of range", text),
                )
            })
        }
    }

    /// Build the expected-vs-actual error for a mismatched shift, reporting
    /// "end of input" when the stream is exhausted.
    fn mismatch(&self, expected: &str, found: Option<Token>) -> ParseError {
        match found {
            Some(tok) => self.error_at(
                tok.location(),
                format!("expected {}, found {}", expected, tok),
            ),
            None => self.error_at(
                self.tokens.current_location(),
                format!("expected {}, found end of input", expected),
            ),
        }
    }

    fn error_at(&self, location: SourceLocation, message: String) -> ParseError {
        ParseError {
            file: self.tokens.file().to_string(),
            message,
            location,
        }
    }
}
