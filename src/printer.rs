//! Canonical pretty-printer for the syntax tree
//!
//! Walks a parsed [`Program`] and renders it back to source text: one
//! statement per line, each terminated by `;`. The output is the canonical
//! form, not a byte-for-byte copy of the input (whitespace is normalized),
//! but it re-parses to a tree that prints identically.
//!
//! The tree model is a set of closed enums, so "printer doesn't know this
//! node kind" is a compile error here rather than a runtime defect: extending
//! the grammar without extending a `match` below fails the build.

use crate::parser::ast::{Declaration, Expr, Program, Statement, TypeRef};

/// Render a whole program, one statement per line in source order.
pub fn print_program(program: &Program) -> String {
    let mut out = String::new();
    for stmt in &program.statements {
        print_statement(&mut out, stmt);
    }
    out
}

fn print_statement(out: &mut String, stmt: &Statement) {
    match stmt {
        Statement::Declaration(decl) => print_declaration(out, decl),
        Statement::Expression(expr) => print_expr(out, expr),
    }
    out.push_str(";\n");
}

fn print_declaration(out: &mut String, decl: &Declaration) {
    print_type_ref(out, &decl.ty);
    out.push(' ');
    out.push_str(&decl.name.name);
}

fn print_type_ref(out: &mut String, ty: &TypeRef) {
    out.push_str(ty.ty.spelling());
}

fn print_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Symbol(name, _) => out.push_str(name),
        Expr::Number(value, _) => out.push_str(&value.to_string()),
    }
}
