//! Type parsing implementation.
//!
//! This module handles parsing of type annotations and type expressions.
//! It supports:
//!
//! - Primitive types (`int`, `float`, `bool`, `char`, `string`, `void`)
//! - Named types (identifier references)
//! - Array types (`Type[size]`)
//! - Generic instantiations (`Base<Arg, ...>`)
//! - Pointer types (`*Type`, right-recursive)
//!
//! Similar to expression parsing, it uses NUD/LED handlers with binding
//! powers. These tables exist only for type-position contexts (after `:`
//! annotations and after `as`); in expression position `<` always lexes as
//! a comparison, which is what removes the generic-vs-comparison ambiguity
//! without backtracking.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::TypeId,
        types::{PrimitiveKind, Type},
    },
    diagnostics::diagnostics::{Diagnostic, DiagnosticKind},
    lexer::tokens::TokenKind,
    Span,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Upper bound on `parse_type` recursion. Pointer prefixes are collected
/// iteratively and do not count against it.
pub const MAX_TYPE_NESTING: usize = 128;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeId, Diagnostic>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, TypeId, BindingPower) -> Result<TypeId, Diagnostic>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;

/// Type alias for type binding power lookup table.
pub type TypeBPLookup = HashMap<TokenKind, BindingPower>;

/// Initializes the type parsing lookup tables.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_symbol_type);
    parser.type_nud(TokenKind::Star, parse_pointer_type);
    parser.type_led(TokenKind::OpenBracket, BindingPower::Call, parse_array_type);
    parser.type_led(TokenKind::Less, BindingPower::Call, parse_generic_type);
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<TypeId, Diagnostic> {
    let token = parser.expect(TokenKind::Identifier)?;

    let ty = match PrimitiveKind::from_name(&token.value) {
        Some(kind) => Type::Primitive {
            kind,
            span: token.span,
        },
        None => Type::Named {
            name: token.value,
            span: token.span,
        },
    };

    Ok(parser.alloc_type(ty))
}

/// Parses one or more `*` prefixes followed by the pointee type.
///
/// The stars are counted iteratively and the nesting is built bottom-up, so
/// `****T` never recurses; deeply nested pointer annotations are bounded
/// by the arena, not the native call stack.
pub fn parse_pointer_type(parser: &mut Parser) -> Result<TypeId, Diagnostic> {
    let start = parser.current_token().span.start;

    let mut stars = 0usize;
    while parser.current_token_kind() == TokenKind::Star {
        parser.advance();
        stars += 1;
    }

    let mut ty = parse_type(parser, BindingPower::Default)?;

    for _ in 0..stars {
        let end = parser.type_span(ty).end;
        ty = parser.alloc_type(Type::Pointer {
            pointee: ty,
            span: Span { start, end },
        });
    }

    Ok(ty)
}

pub fn parse_array_type(
    parser: &mut Parser,
    left: TypeId,
    _bp: BindingPower,
) -> Result<TypeId, Diagnostic> {
    parser.advance();

    // The size is an ordinary expression, parsed in expression position
    let size = parse_expr(parser, BindingPower::Default)?;

    let end = parser.expect(TokenKind::CloseBracket)?.span.end;

    let span = Span {
        start: parser.type_span(left).start,
        end,
    };
    Ok(parser.alloc_type(Type::Array {
        element: left,
        size,
        span,
    }))
}

pub fn parse_generic_type(
    parser: &mut Parser,
    left: TypeId,
    _bp: BindingPower,
) -> Result<TypeId, Diagnostic> {
    parser.advance();

    // At least one argument; no trailing comma
    let mut arguments = vec![];
    loop {
        arguments.push(parse_type(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    let end = parser.expect(TokenKind::Greater)?.span.end;

    let span = Span {
        start: parser.type_span(left).start,
        end,
    };
    Ok(parser.alloc_type(Type::Generic {
        base: left,
        arguments,
        span,
    }))
}

/// Parses a type in type-position.
///
/// Exceeding the nesting bound records a diagnostic and yields an error
/// placeholder type; the enclosing statement recovers at its boundary.
pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<TypeId, Diagnostic> {
    if parser.type_depth() >= MAX_TYPE_NESTING {
        let span = parser.current_token().span;
        parser.report(Diagnostic::new(
            DiagnosticKind::TypeNestingTooDeep {
                limit: MAX_TYPE_NESTING,
            },
            span,
        ));
        return Ok(parser.alloc_type(Type::Error { span }));
    }

    parser.enter_type();
    let result = parse_type_bp(parser, bp);
    parser.exit_type();
    result
}

fn parse_type_bp(parser: &mut Parser, bp: BindingPower) -> Result<TypeId, Diagnostic> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_type_nud_lookup().contains_key(&token_kind) {
        return Err(Diagnostic::new(
            DiagnosticKind::UnexpectedTokenDetailed {
                found: parser.current_token().value.clone(),
                message: String::from("expected a type"),
            },
            parser.current_token().span,
        ));
    }

    let nud_handler = *parser.get_type_nud_lookup().get(&token_kind).unwrap();
    let mut left = nud_handler(parser)?;

    // While LED and current BP is greater than the minimum BP, continue
    // extending the left-hand side
    while *parser
        .get_type_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();

        // A binding power without a LED means the token can only open a
        // type (e.g. `*`). The annotation ends here and the enclosing rule
        // reports the token against what it actually expects.
        let led_handler = match parser.get_type_led_lookup().get(&token_kind) {
            Some(handler) => *handler,
            None => break,
        };
        let power = *parser.get_type_bp_lookup().get(&token_kind).unwrap();
        left = led_handler(parser, left, power)?;
    }

    Ok(left)
}
