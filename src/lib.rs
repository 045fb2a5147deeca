#![allow(clippy::module_inception)]

use crate::ast::ast::SyntaxTree;
use crate::diagnostics::diagnostics::{Diagnostic, ErrorTip};

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source buffer: byte offset plus 1-based line/column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn empty() -> Self {
        Span {
            start: Position::start(),
            end: Position::start(),
        }
    }
}

/// Lexes and parses a complete source buffer in one shot.
///
/// The tree is returned even when diagnostics are non-empty; statements that
/// could not be parsed are represented by error placeholder nodes.
pub fn parse_source(source: &str) -> (SyntaxTree, Vec<Diagnostic>) {
    let (tokens, mut diagnostics) = lexer::lexer::tokenize(source);
    let (tree, parse_diagnostics) = parser::parser::parse(tokens);
    diagnostics.extend(parse_diagnostics);
    (tree, diagnostics)
}

pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len().saturating_sub(1));

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

pub fn display_diagnostic(diagnostic: &Diagnostic, source: &str) {
    /*
        error: message
        -> 20:5
           |
        20 | let a = #;
           | --------^
    */

    let position = diagnostic.get_span().start;
    let (line, line_text, line_pos) = get_line_at_position(source, position.offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = diagnostic.get_tip() {
        println!("Error: {}", diagnostic.get_error_name());
    } else {
        println!(
            "Error: {} ({})",
            diagnostic.get_error_name(),
            diagnostic.get_tip()
        );
    }
    println!("-> {}:{}", position.line, position.column);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "let x = 1;\nlet y = 2;\n\nfn main() { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x = 1;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 23);
        assert_eq!(line_number, 4);
        assert_eq!(line, "fn main() { }\n");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_parse_source_collects_both_phases() {
        // `$` is a lex error, the dangling `let` is a parse error
        let (_, diagnostics) = super::parse_source("$ let;");
        assert!(diagnostics.len() >= 2);
    }
}
