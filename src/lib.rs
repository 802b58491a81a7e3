//! # Introduction
//!
//! minicc is the front end of a minimal compiler for a tiny C subset:
//! integer variable declarations and bare expression statements. It lexes
//! source text on demand, parses it by recursive descent with one token of
//! lookahead, and pretty-prints the resulting tree back to canonical form.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → TokenStream → Parser → Program → Printer
//! ```
//!
//! 1. [`parser::lexer`] — tokenises the source one token at a time.
//! 2. [`parser::stream`] — single-slot lookahead buffer the parser peeks.
//! 3. [`parser::parser`] — builds the [`parser::ast::Program`] tree.
//! 4. [`printer`] — renders the tree back to source text.
//!
//! Every stage returns a typed error; nothing in the library prints or
//! terminates the process. The thin binary driver reads the file, runs the
//! pipeline, and maps errors to diagnostics and a non-zero exit status.
//!
//! ## Supported language
//!
//! ```text
//! program     := statement*
//! statement   := (declaration | expression) ';'
//! declaration := "int" identifier
//! expression  := identifier | number
//! ```

pub mod parser;
pub mod printer;
