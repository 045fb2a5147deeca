//! Unit tests for the diagnostics module.

use crate::{Position, Span};

use super::diagnostics::{Diagnostic, DiagnosticKind, ErrorTip};

fn span(start: u32, end: u32) -> Span {
    Span {
        start: Position {
            offset: start,
            line: 1,
            column: start + 1,
        },
        end: Position {
            offset: end,
            line: 1,
            column: end + 1,
        },
    }
}

#[test]
fn test_diagnostic_holds_span() {
    let diagnostic = Diagnostic::new(DiagnosticKind::UnterminatedString, span(3, 10));

    assert_eq!(diagnostic.get_span().start.offset, 3);
    assert_eq!(diagnostic.get_span().end.offset, 10);
}

#[test]
fn test_error_names() {
    let cases = vec![
        (
            DiagnosticKind::UnrecognisedCharacter { character: '#' },
            "UnrecognisedCharacter",
        ),
        (DiagnosticKind::UnterminatedString, "UnterminatedString"),
        (DiagnosticKind::UnterminatedChar, "UnterminatedChar"),
        (
            DiagnosticKind::MalformedChar {
                lexeme: String::from("'ab'"),
            },
            "MalformedChar",
        ),
        (
            DiagnosticKind::UnterminatedBlockComment,
            "UnterminatedBlockComment",
        ),
        (
            DiagnosticKind::UnexpectedToken {
                found: String::from("}"),
                expected: String::from(";"),
            },
            "UnexpectedToken",
        ),
        (
            DiagnosticKind::UnexpectedTokenDetailed {
                found: String::from("let"),
                message: String::from("expected an expression"),
            },
            "UnexpectedTokenDetailed",
        ),
        (DiagnosticKind::DuplicateDefaultClause, "DuplicateDefaultClause"),
        (
            DiagnosticKind::TypeNestingTooDeep { limit: 128 },
            "TypeNestingTooDeep",
        ),
    ];

    for (kind, name) in cases {
        let diagnostic = Diagnostic::new(kind, span(0, 1));
        assert_eq!(diagnostic.get_error_name(), name);
    }
}

#[test]
fn test_lex_error_classification() {
    let lex = Diagnostic::new(
        DiagnosticKind::UnrecognisedCharacter { character: '$' },
        span(0, 1),
    );
    let parse = Diagnostic::new(
        DiagnosticKind::UnexpectedToken {
            found: String::from("}"),
            expected: String::from(";"),
        },
        span(0, 1),
    );

    assert!(lex.is_lex_error());
    assert!(!parse.is_lex_error());
}

#[test]
fn test_messages() {
    let diagnostic = Diagnostic::new(
        DiagnosticKind::UnexpectedToken {
            found: String::from("fn"),
            expected: String::from(";"),
        },
        span(0, 2),
    );
    assert_eq!(diagnostic.message(), "unexpected token: \"fn\", expected ;");

    let diagnostic = Diagnostic::new(
        DiagnosticKind::UnrecognisedCharacter { character: '#' },
        span(0, 1),
    );
    assert_eq!(diagnostic.message(), "unrecognised character: '#'");

    let diagnostic = Diagnostic::new(DiagnosticKind::DuplicateDefaultClause, span(0, 7));
    assert_eq!(
        diagnostic.message(),
        "duplicate default clause in switch statement"
    );

    let diagnostic = Diagnostic::new(DiagnosticKind::TypeNestingTooDeep { limit: 128 }, span(0, 1));
    assert_eq!(
        diagnostic.message(),
        "type nesting exceeds the maximum depth of 128"
    );
}

#[test]
fn test_tips() {
    let diagnostic = Diagnostic::new(DiagnosticKind::UnterminatedString, span(0, 5));
    match diagnostic.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("closing `\"`")),
        ErrorTip::None => panic!("expected a suggestion"),
    }

    let diagnostic = Diagnostic::new(
        DiagnosticKind::UnrecognisedCharacter { character: '#' },
        span(0, 1),
    );
    assert!(matches!(diagnostic.get_tip(), ErrorTip::None));
}

#[test]
fn test_tip_display() {
    assert_eq!(format!("{}", ErrorTip::None), "");
    assert_eq!(
        format!("{}", ErrorTip::Suggestion(String::from("add a semicolon"))),
        "add a semicolon"
    );
}
