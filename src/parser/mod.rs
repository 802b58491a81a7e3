//! Front end for the minimal C subset
//!
//! Transforms source text into a syntax tree:
//! - [`lexer`]: on-demand tokenization (source text → tokens)
//! - [`stream`]: one-token lookahead buffer between lexer and parser
//! - [`parser`]: recursive descent (tokens → syntax tree)
//! - [`ast`]: syntax tree definitions
//!
//! # Supported language
//!
//! Integer variable declarations (`int x;`) and bare expression statements
//! (an identifier or a numeric literal followed by `;`). Nothing else: no
//! operators, no control flow, no preprocessor.
//!
//! # Implementation
//!
//! Hand-written recursive descent with exactly one token of lookahead; the
//! grammar is designed so no rule ever needs more. No external parser
//! generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod stream;
