// Syntax tree definitions for the minimal C front end

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Primitive types the language recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Int,
}

impl PrimitiveType {
    /// Canonical source spelling of the type
    pub fn spelling(self) -> &'static str {
        match self {
            PrimitiveType::Int => "int",
        }
    }
}

/// Type reference node: the `int` in `int x;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef {
    pub ty: PrimitiveType,
    pub location: SourceLocation,
}

/// Symbol (identifier) node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub location: SourceLocation,
}

/// Variable declaration: a type reference followed by a symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub ty: TypeRef,
    pub name: Symbol,
    pub location: SourceLocation,
}

/// Expression nodes (leaves only: the language has no operators yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Symbol(String, SourceLocation),
    Number(i64, SourceLocation),
}

impl Expr {
    /// Get the source location of this expression
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Symbol(_, loc) | Expr::Number(_, loc) => *loc,
        }
    }
}

/// A single statement: a declaration or a bare expression, terminated by `;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Declaration(Declaration),
    Expression(Expr),
}

impl Statement {
    /// Get the source location of this statement
    pub fn location(&self) -> SourceLocation {
        match self {
            Statement::Declaration(decl) => decl.location,
            Statement::Expression(expr) => expr.location(),
        }
    }
}

/// Top-level program structure
///
/// The statement list is the only sequence in the tree model; source order is
/// significant and round-trips through the printer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
