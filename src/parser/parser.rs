//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The parser uses a Pratt approach with NUD/LED handlers for expression
//! and type parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers
//!
//! Diagnostics are collected rather than returned at the first error: a
//! failed statement is recorded, the cursor synchronizes to the next
//! statement boundary, and parsing resumes.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::{ExprId, StmtId, SyntaxTree, TypeId},
        expressions::Expr,
        statements::Stmt,
        types::Type,
    },
    diagnostics::diagnostics::{Diagnostic, DiagnosticKind},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
    types::{
        create_token_type_lookups, TypeBPLookup, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler,
        TypeNUDLookup,
    },
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the significant-token cursor, the trivia attachments,
/// the tree arena being built, the diagnostics collector, and the lookup
/// tables for statements, expressions, and types.
pub struct Parser {
    /// Significant tokens (comments filtered out), terminated by EOF
    tokens: Vec<Token>,
    /// Comment tokens, each attached to the index of the following
    /// significant token
    trivia: Vec<(usize, Token)>,
    /// Current position in the token stream
    pos: usize,
    /// First trivia entry not yet handed to the tree
    trivia_pos: usize,
    /// The tree arena under construction
    tree: SyntaxTree,
    /// Collected parse diagnostics
    diagnostics: Vec<Diagnostic>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type null denotation handlers
    type_nud_lookup: TypeNUDLookup,
    /// Lookup table for type left denotation handlers
    type_led_lookup: TypeLEDLookup,
    /// Lookup table for type binding powers
    type_binding_power_lookup: TypeBPLookup,
    /// Current `parse_type` recursion depth, bounded by MAX_TYPE_NESTING
    type_depth: usize,
}

impl Parser {
    /// Creates a new Parser over a token stream produced by the lexer.
    ///
    /// Comment tokens are split out of the significant stream and attached
    /// to the index of the token that follows them.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut significant = Vec::with_capacity(tokens.len());
        let mut trivia = vec![];

        for token in tokens {
            if token.is_trivia() {
                trivia.push((significant.len(), token));
            } else {
                significant.push(token);
            }
        }

        Parser {
            tokens: significant,
            trivia,
            pos: 0,
            trivia_pos: 0,
            tree: SyntaxTree::new(),
            diagnostics: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            type_led_lookup: HashMap::new(),
            type_binding_power_lookup: HashMap::new(),
            type_depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos).unwrap().kind
    }

    /// Advances to the next token and returns the token that was current.
    /// Never moves past the trailing EOF.
    pub fn advance(&mut self) -> &Token {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
            self.tokens.get(self.pos - 1).unwrap()
        } else {
            self.tokens.get(self.pos).unwrap()
        }
    }

    /// Current index into the significant-token stream.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// End position of the most recently consumed token.
    pub fn previous_end(&self) -> Position {
        if self.pos == 0 {
            self.tokens[0].span.start
        } else {
            self.tokens[self.pos - 1].span.end
        }
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Diagnostic>,
    ) -> Result<Token, Diagnostic> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Diagnostic::new(
                    DiagnosticKind::UnexpectedToken {
                        found: token.value.clone(),
                        expected: format!("{}", expected_kind),
                    },
                    token.span,
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Diagnostic> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }

    /// Records a diagnostic and keeps parsing.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Skips ahead to the next statement boundary: just past the next
    /// top-level `;`, or in front of the `}` closing the enclosing block
    /// (left for the block rule to consume). Balances nested braces on the
    /// way.
    pub fn synchronize(&mut self) {
        let mut depth = 0usize;

        while self.has_tokens() {
            match self.current_token_kind() {
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    return;
                }
                TokenKind::OpenCurly => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::CloseCurly => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                    self.advance();
                    if depth == 0 {
                        return;
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Materializes comments attached to the current cursor position as
    /// `Comment` statements, in source order. Trivia attached to earlier,
    /// mid-statement positions is flushed to the tree's trivia list only.
    pub fn take_leading_comments(&mut self) -> Vec<StmtId> {
        let mut comments = vec![];

        while self.trivia_pos < self.trivia.len() && self.trivia[self.trivia_pos].0 < self.pos {
            let (_, token) = self.trivia[self.trivia_pos].clone();
            self.tree.push_trivia(token);
            self.trivia_pos += 1;
        }

        while self.trivia_pos < self.trivia.len() && self.trivia[self.trivia_pos].0 == self.pos {
            let (_, token) = self.trivia[self.trivia_pos].clone();
            let id = self.tree.alloc_stmt(Stmt::Comment {
                text: token.value.clone(),
                span: token.span,
            });
            self.tree.push_trivia(token);
            comments.push(id);
            self.trivia_pos += 1;
        }

        comments
    }

    /// Hands any remaining trivia to the tree.
    pub fn flush_remaining_trivia(&mut self) {
        while self.trivia_pos < self.trivia.len() {
            let (_, token) = self.trivia[self.trivia_pos].clone();
            self.tree.push_trivia(token);
            self.trivia_pos += 1;
        }
    }

    // Arena passthroughs

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        self.tree.alloc_stmt(stmt)
    }

    pub fn push_root(&mut self, id: StmtId) {
        self.tree.push_root(id);
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        self.tree.alloc_expr(expr)
    }

    pub fn alloc_type(&mut self, ty: Type) -> TypeId {
        self.tree.alloc_type(ty)
    }

    pub fn stmt_span(&self, id: StmtId) -> Span {
        self.tree.stmt(id).span()
    }

    pub fn expr_span(&self, id: ExprId) -> Span {
        self.tree.expr(id).span()
    }

    pub fn type_span(&self, id: TypeId) -> Span {
        self.tree.ty(id).span()
    }

    // Lookup table accessors and registration

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    pub fn get_type_led_lookup(&self) -> &TypeLEDLookup {
        &self.type_led_lookup
    }

    pub fn get_type_bp_lookup(&self) -> &TypeBPLookup {
        &self.type_binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token. Does not
    /// clobber a binding power the token already has as an infix operator.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type left denotation handler.
    pub fn type_led(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        led_fn: TypeLEDHandler,
    ) {
        self.type_binding_power_lookup.insert(kind, binding_power);
        self.type_led_lookup.insert(kind, led_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    // Type nesting guard

    pub fn type_depth(&self) -> usize {
        self.type_depth
    }

    pub fn enter_type(&mut self) {
        self.type_depth += 1;
    }

    pub fn exit_type(&mut self) {
        self.type_depth -= 1;
    }

    fn finish(mut self, span: Span) -> (SyntaxTree, Vec<Diagnostic>) {
        self.tree.set_span(span);
        (self.tree, self.diagnostics)
    }
}

/// Parses a stream of tokens into a syntax tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses top-level statements until EOF.
/// The tree is built best-effort: statements that fail to parse become
/// error placeholder nodes and their diagnostics are collected.
pub fn parse(tokens: Vec<Token>) -> (SyntaxTree, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    loop {
        for comment in parser.take_leading_comments() {
            parser.push_root(comment);
        }

        if !parser.has_tokens() {
            break;
        }

        let stmt = parse_stmt(&mut parser);
        parser.push_root(stmt);
    }

    parser.flush_remaining_trivia();

    let end = parser.current_token().span.end;
    parser.finish(Span {
        start: Position::start(),
        end,
    })
}
