use crate::Span;

use super::ast::{ExprId, StmtId, TypeId};

/// A typed function parameter (`name: Type`).
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeId,
    pub span: Span,
}

/// A typed struct field (`name: Type`).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeId,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumVariant {
    pub name: String,
    pub span: Span,
}

/// One `case expr: block` arm of a switch statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub value: ExprId,
    pub body: StmtId,
    pub span: Span,
}

/// The argument form of an `@name` attribute: a string, a bare identifier,
/// or a parenthesized expression list.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeArgument {
    String(String),
    Identifier(String),
    Expressions(Vec<ExprId>),
}

/// Statement node kinds.
///
/// Variant names and child ordering are stable API: the downstream
/// highlighting consumer matches on them structurally.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Attribute {
        name: String,
        argument: Option<AttributeArgument>,
        alias: Option<String>,
        span: Span,
    },
    ConstDecl {
        name: String,
        ty: Option<TypeId>,
        value: ExprId,
        span: Span,
    },
    LetDecl {
        name: String,
        ty: Option<TypeId>,
        value: ExprId,
        span: Span,
    },
    FunctionDecl {
        name: String,
        parameters: Vec<Parameter>,
        return_type: Option<TypeId>,
        body: StmtId,
        span: Span,
    },
    TypeDecl {
        name: String,
        aliased: TypeId,
        span: Span,
    },
    StructDecl {
        name: String,
        fields: Vec<Field>,
        span: Span,
    },
    EnumDecl {
        name: String,
        variants: Vec<EnumVariant>,
        span: Span,
    },
    Import {
        name: String,
        from: Option<String>,
        span: Span,
    },
    Export {
        name: String,
        span: Span,
    },
    Expression {
        expression: ExprId,
        span: Span,
    },
    If {
        condition: ExprId,
        then_block: StmtId,
        else_branch: Option<StmtId>,
        span: Span,
    },
    While {
        condition: ExprId,
        body: StmtId,
        span: Span,
    },
    For {
        binding: String,
        iterable: ExprId,
        body: StmtId,
        span: Span,
    },
    Loop {
        body: StmtId,
        span: Span,
    },
    Return {
        value: Option<ExprId>,
        span: Span,
    },
    Break {
        span: Span,
    },
    Continue {
        span: Span,
    },
    Switch {
        scrutinee: ExprId,
        cases: Vec<SwitchCase>,
        default: Option<StmtId>,
        span: Span,
    },
    Module {
        name: String,
        body: StmtId,
        span: Span,
    },
    Namespace {
        name: String,
        body: StmtId,
        span: Span,
    },
    Defer {
        expression: ExprId,
        span: Span,
    },
    Block {
        statements: Vec<StmtId>,
        span: Span,
    },
    Comment {
        text: String,
        span: Span,
    },
    /// Placeholder for a statement that failed to parse; the diagnostics
    /// collector holds the corresponding error.
    Error {
        span: Span,
    },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Attribute { span, .. }
            | Stmt::ConstDecl { span, .. }
            | Stmt::LetDecl { span, .. }
            | Stmt::FunctionDecl { span, .. }
            | Stmt::TypeDecl { span, .. }
            | Stmt::StructDecl { span, .. }
            | Stmt::EnumDecl { span, .. }
            | Stmt::Import { span, .. }
            | Stmt::Export { span, .. }
            | Stmt::Expression { span, .. }
            | Stmt::If { span, .. }
            | Stmt::While { span, .. }
            | Stmt::For { span, .. }
            | Stmt::Loop { span, .. }
            | Stmt::Return { span, .. }
            | Stmt::Break { span }
            | Stmt::Continue { span }
            | Stmt::Switch { span, .. }
            | Stmt::Module { span, .. }
            | Stmt::Namespace { span, .. }
            | Stmt::Defer { span, .. }
            | Stmt::Block { span, .. }
            | Stmt::Comment { span, .. }
            | Stmt::Error { span } => *span,
        }
    }
}
