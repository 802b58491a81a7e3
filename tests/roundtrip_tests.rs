// Integration tests for the full lex → parse → print pipeline

use minicc::parser::ast::{Expr, PrimitiveType, Statement};
use minicc::parser::parser::Parser;
use minicc::printer::print_program;

fn pipeline(source: &str) -> Result<String, minicc::parser::parser::ParseError> {
    let program = Parser::new("test.c", source).parse_program()?;
    Ok(print_program(&program))
}

#[test]
fn test_declaration_round_trip() {
    assert_eq!(pipeline("int x;").unwrap(), "int x;\n");
}

#[test]
fn test_multiple_statements_preserve_order() {
    assert_eq!(pipeline("int a; int b; 5;").unwrap(), "int a;\nint b;\n5;\n");
}

#[test]
fn test_numeric_literal_fidelity() {
    let program = Parser::new("test.c", "42;").parse_program().unwrap();

    assert_eq!(program.statements.len(), 1);
    assert!(matches!(
        &program.statements[0],
        Statement::Expression(Expr::Number(42, _))
    ));
    assert_eq!(print_program(&program), "42;\n");
}

#[test]
fn test_empty_and_whitespace_programs() {
    assert_eq!(pipeline("").unwrap(), "");
    assert_eq!(pipeline(" \n\t \n").unwrap(), "");
}

#[test]
fn test_declaration_tree_shape() {
    let program = Parser::new("test.c", "int x;").parse_program().unwrap();

    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Statement::Declaration(decl) => {
            assert_eq!(decl.ty.ty, PrimitiveType::Int);
            assert_eq!(decl.name.name, "x");
        }
        _ => panic!("Expected declaration statement"),
    }
}

#[test]
fn test_printing_is_a_fixed_point() {
    let sources = [
        "int x;",
        "  int   a ;\nint b;\n  5;",
        "042; foo; int _tmp;",
        "0;",
        "",
    ];

    for source in sources {
        let printed = pipeline(source).unwrap();
        let reprinted = pipeline(&printed).unwrap();
        assert_eq!(printed, reprinted, "not a fixed point for {:?}", source);
    }
}

#[test]
fn test_unknown_type_fails() {
    // `float` lexes as a plain identifier, so this reads as an expression
    // statement missing its ';'
    let err = pipeline("float x;").unwrap_err();
    assert!(err.message.contains("expected ';'"));
}

#[test]
fn test_missing_semicolon_fails() {
    let err = pipeline("int x").unwrap_err();
    assert!(err.message.contains("end of input"));
}

#[test]
fn test_unrecognized_character_fails() {
    let err = pipeline("int x @;").unwrap_err();
    assert!(err.message.contains('@'));
}

#[test]
fn test_error_display_names_the_file() {
    let err = pipeline("$").unwrap_err();
    assert!(err.to_string().starts_with("test.c:"));
}
