//! The syntax tree arena.
//!
//! All nodes live in one owning collection per node class and reference
//! their children by index. The grammar is acyclic by construction;
//! arena+index ownership additionally keeps deeply nested pointer and
//! generic types from turning into deep allocation chains.

use crate::{lexer::tokens::Token, Span};

use super::{expressions::Expr, statements::Stmt, types::Type};

/// Index of a statement node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StmtId(u32);

/// Index of an expression node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(u32);

/// Index of a type node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(u32);

/// The root node: an ordered sequence of top-level statements covering the
/// whole input.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub statements: Vec<StmtId>,
    pub span: Span,
}

/// The immutable output of a parse.
///
/// Nodes are created during parsing and never mutated afterwards; the whole
/// tree is owned by the parse result and released together.
#[derive(Debug)]
pub struct SyntaxTree {
    stmts: Vec<Stmt>,
    exprs: Vec<Expr>,
    types: Vec<Type>,
    source_file: SourceFile,
    trivia: Vec<Token>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        SyntaxTree {
            stmts: vec![],
            exprs: vec![],
            types: vec![],
            source_file: SourceFile {
                statements: vec![],
                span: Span::empty(),
            },
            trivia: vec![],
        }
    }

    pub(crate) fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId(self.stmts.len() as u32);
        self.stmts.push(stmt);
        id
    }

    pub(crate) fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    pub(crate) fn alloc_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    pub(crate) fn push_root(&mut self, id: StmtId) {
        self.source_file.statements.push(id);
    }

    pub(crate) fn push_trivia(&mut self, token: Token) {
        self.trivia.push(token);
    }

    pub(crate) fn set_span(&mut self, span: Span) {
        self.source_file.span = span;
    }

    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.0 as usize]
    }

    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.0 as usize]
    }

    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.0 as usize]
    }

    pub fn source_file(&self) -> &SourceFile {
        &self.source_file
    }

    /// Top-level statements in source order.
    pub fn root(&self) -> &[StmtId] {
        &self.source_file.statements
    }

    /// Comment tokens in source order, kept for layout round-tripping.
    pub fn trivia(&self) -> &[Token] {
        &self.trivia
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

impl Default for SyntaxTree {
    fn default() -> Self {
        SyntaxTree::new()
    }
}
