use crate::Span;

use super::ast::{ExprId, TypeId};

/// The built-in primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Int,
    Float,
    Bool,
    Char,
    String,
    Void,
}

impl PrimitiveKind {
    pub fn from_name(name: &str) -> Option<PrimitiveKind> {
        match name {
            "int" => Some(PrimitiveKind::Int),
            "float" => Some(PrimitiveKind::Float),
            "bool" => Some(PrimitiveKind::Bool),
            "char" => Some(PrimitiveKind::Char),
            "string" => Some(PrimitiveKind::String),
            "void" => Some(PrimitiveKind::Void),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Int => "int",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Char => "char",
            PrimitiveKind::String => "string",
            PrimitiveKind::Void => "void",
        }
    }
}

/// Type node kinds.
///
/// Pointer types are right-recursive: `**T` is `Pointer(Pointer(T))`.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Primitive {
        kind: PrimitiveKind,
        span: Span,
    },
    Named {
        name: String,
        span: Span,
    },
    /// `Element[size]`; the size is an arbitrary expression.
    Array {
        element: TypeId,
        size: ExprId,
        span: Span,
    },
    /// `Base<Arg, ...>` with at least one argument.
    Generic {
        base: TypeId,
        arguments: Vec<TypeId>,
        span: Span,
    },
    Pointer {
        pointee: TypeId,
        span: Span,
    },
    /// Placeholder for a type that failed to parse.
    Error {
        span: Span,
    },
}

impl Type {
    pub fn span(&self) -> Span {
        match self {
            Type::Primitive { span, .. }
            | Type::Named { span, .. }
            | Type::Array { span, .. }
            | Type::Generic { span, .. }
            | Type::Pointer { span, .. }
            | Type::Error { span } => *span,
        }
    }
}
