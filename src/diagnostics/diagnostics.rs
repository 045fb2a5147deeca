use std::fmt::Display;

use thiserror::Error;

use crate::Span;

/// A single lex or parse diagnostic, anchored to a source span.
///
/// Diagnostics are collected rather than thrown: both phases keep going
/// after recording one, so a single pass can report multiple independent
/// problems.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    span: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Diagnostic { kind, span }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    /// Renders the diagnostic message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Whether the diagnostic was produced by the lexer.
    pub fn is_lex_error(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticKind::UnrecognisedCharacter { .. }
                | DiagnosticKind::UnterminatedString
                | DiagnosticKind::UnterminatedChar
                | DiagnosticKind::MalformedChar { .. }
                | DiagnosticKind::UnterminatedBlockComment
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            DiagnosticKind::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            DiagnosticKind::UnterminatedString => "UnterminatedString",
            DiagnosticKind::UnterminatedChar => "UnterminatedChar",
            DiagnosticKind::MalformedChar { .. } => "MalformedChar",
            DiagnosticKind::UnterminatedBlockComment => "UnterminatedBlockComment",
            DiagnosticKind::UnexpectedToken { .. } => "UnexpectedToken",
            DiagnosticKind::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            DiagnosticKind::DuplicateDefaultClause => "DuplicateDefaultClause",
            DiagnosticKind::TypeNestingTooDeep { .. } => "TypeNestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.kind {
            DiagnosticKind::UnrecognisedCharacter { .. } => ErrorTip::None,
            DiagnosticKind::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is missing a closing `\"`",
            )),
            DiagnosticKind::UnterminatedChar => ErrorTip::Suggestion(String::from(
                "Char literal is missing a closing `'`",
            )),
            DiagnosticKind::MalformedChar { lexeme } => ErrorTip::Suggestion(format!(
                "Char literal `{}` must contain exactly one character",
                lexeme
            )),
            DiagnosticKind::UnterminatedBlockComment => {
                ErrorTip::Suggestion(String::from("Block comment is missing a closing `*/`"))
            }
            DiagnosticKind::UnexpectedToken { found, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                found, expected
            )),
            DiagnosticKind::UnexpectedTokenDetailed { found, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", found, message))
            }
            DiagnosticKind::DuplicateDefaultClause => ErrorTip::Suggestion(String::from(
                "A switch statement may hold at most one default clause",
            )),
            DiagnosticKind::TypeNestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Type annotations may nest at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated char literal")]
    UnterminatedChar,
    #[error("malformed char literal: {lexeme:?}")]
    MalformedChar { lexeme: String },
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("unexpected token: {found:?}, expected {expected}")]
    UnexpectedToken { found: String, expected: String },
    #[error("unexpected token ({message}): {found:?}")]
    UnexpectedTokenDetailed { found: String, message: String },
    #[error("duplicate default clause in switch statement")]
    DuplicateDefaultClause,
    #[error("type nesting exceeds the maximum depth of {limit}")]
    TypeNestingTooDeep { limit: usize },
}
