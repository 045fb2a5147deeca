use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{ExprId, StmtId, TypeId},
    statements::Parameter,
};

/// The payload of a literal expression.
///
/// Number lexemes are kept verbatim so the tree can round-trip source
/// spelling; string and char values hold the decoded text.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(String),
    String(String),
    Char(String),
    Boolean(bool),
    Array(Vec<ExprId>),
}

/// Expression node kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier {
        name: String,
        span: Span,
    },
    Literal {
        value: LiteralValue,
        span: Span,
    },
    Call {
        callee: ExprId,
        arguments: Vec<ExprId>,
        span: Span,
    },
    /// `object.property` or, with `static_access`, `Object::property`.
    Member {
        object: ExprId,
        property: String,
        property_span: Span,
        static_access: bool,
        span: Span,
    },
    Binary {
        left: ExprId,
        operator: Token,
        right: ExprId,
        span: Span,
    },
    Unary {
        operator: Token,
        operand: ExprId,
        span: Span,
    },
    Parenthesized {
        inner: ExprId,
        span: Span,
    },
    Cast {
        value: ExprId,
        target: TypeId,
        span: Span,
    },
    /// Anonymous function literal: `fn (params) [: Type] { ... }`.
    Function {
        parameters: Vec<Parameter>,
        return_type: Option<TypeId>,
        body: StmtId,
        span: Span,
    },
    /// Placeholder for an expression that failed to parse.
    Error {
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier { span, .. }
            | Expr::Literal { span, .. }
            | Expr::Call { span, .. }
            | Expr::Member { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Parenthesized { span, .. }
            | Expr::Cast { span, .. }
            | Expr::Function { span, .. }
            | Expr::Error { span } => *span,
        }
    }
}
