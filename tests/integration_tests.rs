//! Integration tests for whole-program lexical analysis.
//!
//! These tests run complete programs through the analyzer and check the
//! exposed tables and the all-or-nothing policy on errors.

use lexical_analyzer::{
    analyze,
    errors::errors::ErrorImpl,
    lexeme_code,
    lexer::{symbols::Label, tokens::TokenKind},
    LexicalAnalyzer,
};
use pretty_assertions::assert_eq;

const PROGRAM: &str = "int n, sum, i
in n
sum = 0
i = 1
top: sum = sum + i
i = i + 1
if i <= n ? goto top
out sum
";

#[test]
fn test_full_program_succeeds() {
    let analysis = analyze(PROGRAM).unwrap();

    let names: Vec<&str> = analysis.identifiers.iter().map(|ident| ident.name.as_str()).collect();
    assert_eq!(names, vec!["n", "sum", "i"]);
    assert!(analysis.identifiers.iter().all(|ident| ident.declared_type == "int"));

    let constants: Vec<&str> = analysis.constants.iter().map(|c| c.spelling.as_str()).collect();
    assert_eq!(constants, vec!["0", "1"]);

    assert_eq!(
        analysis.labels,
        vec![Label { name: "top".to_string(), index: 1, line_from: Some(7), line_to: Some(5) }]
    );

    let newlines = analysis.tokens.iter().filter(|token| token.code() == lexeme_code("\n")).count();
    assert_eq!(newlines, 8);
    assert_eq!(analysis.tokens.last().map(|token| token.line), Some(8));
}

#[test]
fn test_token_stream_matches_source_order() {
    let errors = analyze("repeat { out x } until x > 3\n").unwrap_err();

    // `x` is never declared, so only the error list is exposed.
    assert_eq!(errors.len(), 1);

    let analysis = analyze("int x\nrepeat { out x } until x > 3\n").unwrap();
    let texts: Vec<&str> = analysis.tokens.iter().map(|token| token.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["int", "x", "¶", "repeat", "{", "out", "x", "}", "until", "x", ">", "3", "¶"]
    );
}

#[test]
fn test_undeclared_voids_tables() {
    let mut analyzer = LexicalAnalyzer::new();
    let errors = analyzer.run("a\n").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_line(), Some(1));
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::VariableUsedWithoutDeclaration { variable: "a".to_string() }
    );
    assert_eq!(analyzer.errors().len(), 1);
}

#[test]
fn test_redeclaration_scenario() {
    let errors = analyze("int a\nint a\n").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "VariableRedeclared");
    assert_eq!(errors[0].get_line(), Some(2));
}

#[test]
fn test_label_flow_scenario() {
    let analysis = analyze("L: int a\ngoto L\n").unwrap();

    let label = analysis.label("L").unwrap();
    assert_eq!(label.line_to, Some(1));
    assert_eq!(label.line_from, Some(2));
}

#[test]
fn test_binary_minus_scenario() {
    let analysis = analyze("5 - 3\n").unwrap();

    assert_eq!(analysis.constants.len(), 2);
    assert_eq!(analysis.constant("5").map(|c| c.index), Some(1));
    assert_eq!(analysis.constant("3").map(|c| c.index), Some(2));
    assert_eq!(analysis.tokens[1].kind, TokenKind::Spelling(19));
}

#[test]
fn test_lone_bang_scenario() {
    let errors = analyze("!a\n").unwrap_err();

    assert_eq!(
        errors.iter().map(|error| (error.get_line(), error.get_kind().clone())).collect::<Vec<_>>(),
        vec![
            (
                Some(1),
                ErrorImpl::ExpectedSymbol { found: "!".to_string(), expected: "=".to_string() }
            ),
            (Some(1), ErrorImpl::VariableUsedWithoutDeclaration { variable: "a".to_string() }),
        ]
    );
}

#[test]
fn test_any_error_empties_every_table() {
    let source = "int a\ntop: a = 5\n$\ngoto top\n";
    let errors = analyze(source).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_kind(), &ErrorImpl::UnknownSymbol { symbol: '$' });

    let analysis = analyze(&source.replace('$', "")).unwrap();
    assert!(!analysis.tokens.is_empty());
    assert!(!analysis.identifiers.is_empty());
    assert!(!analysis.constants.is_empty());
    assert!(!analysis.labels.is_empty());
}

#[test]
fn test_analysis_serializes_to_json() {
    let analysis = analyze("int a\na = 1\n").unwrap();
    let value = serde_json::to_value(&analysis).unwrap();

    assert_eq!(value["identifiers"][0]["name"], "a");
    assert_eq!(value["identifiers"][0]["declared_type"], "int");
    assert_eq!(value["constants"][0]["spelling"], "1");
    assert_eq!(value["tokens"][0]["id"], 1);
}
