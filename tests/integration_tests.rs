//! End-to-end tests driving the lexer and parser through the public API.

use luma_parser::{
    ast::{expressions::Expr, statements::Stmt, types::Type},
    display_diagnostic,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse_source,
};

const WELL_FORMED_PROGRAM: &str = r#"
// Linked list demo
import alloc from "std/memory";
export list_sum;

@packed
struct Node {
    value: int,
    next: *Node
}

enum Direction { Forward, Backward }

type NodePtr = *Node;

const LIMIT = 100;

module list {
    fn sum(head: NodePtr): int {
        let total: int = 0;
        let cursor = head;
        while cursor != null_ptr {
            total += cursor.value;
            cursor = cursor.next;
        }
        return total;
    }

    fn fill(items: List<int>, count: int) {
        for i in range(0, count) {
            items.push(i * 2);
        }
    }
}

fn classify(d: Direction): string {
    switch d {
        case Direction::Forward: { return "forward"; }
        default: { return "backward"; }
    }
}

fn main() {
    defer report_done();
    let callback = fn (x: int): int { return x + 1; };
    let scaled = LIMIT as float;
    loop {
        if scaled > 1.0 && callback(3) < LIMIT {
            break;
        }
    }
}
"#;

#[test]
fn parses_well_formed_program_without_diagnostics() {
    let (tree, diagnostics) = parse_source(WELL_FORMED_PROGRAM);

    assert!(diagnostics.is_empty(), "diagnostics: {:?}", diagnostics);
    assert!(tree.root().len() >= 9);

    // The root span covers the entire buffer
    let span = tree.source_file().span;
    assert_eq!(span.start.offset, 0);
    assert_eq!(span.end.offset as usize, WELL_FORMED_PROGRAM.len());
}

#[test]
fn parse_is_deterministic() {
    let (first, _) = parse_source(WELL_FORMED_PROGRAM);
    let (second, _) = parse_source(WELL_FORMED_PROGRAM);

    assert_eq!(first.stmt_count(), second.stmt_count());
    assert_eq!(first.root().len(), second.root().len());
    assert_eq!(first.trivia().len(), second.trivia().len());
}

#[test]
fn comments_survive_as_statements_and_trivia() {
    let (tree, diagnostics) = parse_source(WELL_FORMED_PROGRAM);

    assert!(diagnostics.is_empty());
    assert!(matches!(
        tree.stmt(tree.root()[0]),
        Stmt::Comment { text, .. } if text == "// Linked list demo"
    ));
    assert_eq!(tree.trivia().len(), 1);
}

#[test]
fn error_program_still_produces_a_partial_tree() {
    let source = "let a = 1;\nlet b = ;\nlet c = 3;";
    let (tree, diagnostics) = parse_source(source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(tree.root().len(), 3);
    assert!(matches!(tree.stmt(tree.root()[0]), Stmt::LetDecl { .. }));
    assert!(matches!(tree.stmt(tree.root()[1]), Stmt::Error { .. }));
    assert!(matches!(tree.stmt(tree.root()[2]), Stmt::LetDecl { .. }));

    // Rendering a diagnostic against the source must not panic
    display_diagnostic(&diagnostics[0], source);
}

#[test]
fn unterminated_string_reports_and_keeps_earlier_statements() {
    let source = "let a = 1;\nlet s = \"never closed";
    let (tree, diagnostics) = parse_source(source);

    assert!(diagnostics.iter().any(|d| d.is_lex_error()));
    assert!(matches!(tree.stmt(tree.root()[0]), Stmt::LetDecl { .. }));
}

#[test]
fn token_spans_slice_their_lexemes() {
    let source = "fn add(a: int): int { return a + 1; }";
    let (tokens, diagnostics) = tokenize(source);

    assert!(diagnostics.is_empty());
    for token in &tokens {
        if token.kind == TokenKind::EOF || token.kind == TokenKind::String {
            continue;
        }
        let slice = &source[token.span.start.offset as usize..token.span.end.offset as usize];
        assert_eq!(slice, token.value, "span mismatch for {:?}", token.kind);
    }
}

#[test]
fn generic_annotation_and_comparison_coexist() {
    let source = "let pairs: Map<string, int> = make();\nlet smaller = a < b;";
    let (tree, diagnostics) = parse_source(source);

    assert!(diagnostics.is_empty());
    match tree.stmt(tree.root()[0]) {
        Stmt::LetDecl { ty, .. } => {
            assert!(matches!(tree.ty(ty.unwrap()), Type::Generic { .. }));
        }
        other => panic!("expected let declaration, got {:?}", other),
    }
    match tree.stmt(tree.root()[1]) {
        Stmt::LetDecl { value, .. } => {
            assert!(matches!(
                tree.expr(*value),
                Expr::Binary { operator, .. } if operator.kind == TokenKind::Less
            ));
        }
        other => panic!("expected let declaration, got {:?}", other),
    }
}

#[test]
fn deep_type_nesting_is_bounded() {
    // 200 pointer stars stay fine because the prefix is collected iteratively
    let stars = "*".repeat(200);
    let source = format!("let p: {}int = x;", stars);
    let (tree, diagnostics) = parse_source(&source);

    assert!(diagnostics.is_empty());
    assert!(matches!(tree.stmt(tree.root()[0]), Stmt::LetDecl { .. }));

    // Generic nesting beyond the guard degrades to an error type, without
    // overflowing the stack
    let open = "Box<".repeat(300);
    let close = ">".repeat(300);
    let source = format!("let b: {}int{} = x;", open, close);
    let (_, diagnostics) = parse_source(&source);
    assert!(!diagnostics.is_empty());
}

#[test]
fn every_statement_span_lies_within_the_source() {
    let (tree, diagnostics) = parse_source(WELL_FORMED_PROGRAM);

    assert!(diagnostics.is_empty());
    for id in tree.root() {
        let span = tree.stmt(*id).span();
        assert!(span.start.offset <= span.end.offset);
        assert!((span.end.offset as usize) <= WELL_FORMED_PROGRAM.len());
    }
}
