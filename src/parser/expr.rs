use crate::{
    ast::{
        ast::ExprId,
        expressions::{Expr, LiteralValue},
    },
    diagnostics::diagnostics::{Diagnostic, DiagnosticKind},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::BindingPower,
    parser::Parser,
    stmt::{parse_block_stmt, parse_parameter_list},
    types::parse_type,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprId, Diagnostic> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(Diagnostic::new(
            DiagnosticKind::UnexpectedTokenDetailed {
                found: parser.current_token().value.clone(),
                message: String::from("expected an expression"),
            },
            parser.current_token().span,
        ));
    }

    let nud_handler = *parser.get_nud_lookup().get(&token_kind).unwrap();
    let mut left = nud_handler(parser)?;

    // While LED and current BP is greater than the minimum BP, continue
    // extending the left-hand side
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();

        // A binding power without a LED means the token is prefix-only
        // (e.g. `&`). The expression ends here and the enclosing rule
        // reports the token against what it actually expects.
        let led_handler = match parser.get_led_lookup().get(&token_kind) {
            Some(handler) => *handler,
            None => break,
        };
        let power = *parser.get_bp_lookup().get(&token_kind).unwrap();
        left = led_handler(parser, left, power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprId, Diagnostic> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();
            Ok(parser.alloc_expr(Expr::Literal {
                value: LiteralValue::Number(token.value),
                span: token.span,
            }))
        }
        TokenKind::String => {
            let token = parser.advance().clone();
            Ok(parser.alloc_expr(Expr::Literal {
                value: LiteralValue::String(token.value),
                span: token.span,
            }))
        }
        TokenKind::Char => {
            let token = parser.advance().clone();
            Ok(parser.alloc_expr(Expr::Literal {
                value: LiteralValue::Char(token.value),
                span: token.span,
            }))
        }
        TokenKind::Boolean => {
            let token = parser.advance().clone();
            Ok(parser.alloc_expr(Expr::Literal {
                value: LiteralValue::Boolean(token.value == "true"),
                span: token.span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(parser.alloc_expr(Expr::Identifier {
                name: token.value,
                span: token.span,
            }))
        }
        _ => Err(Diagnostic::new(
            DiagnosticKind::UnexpectedTokenDetailed {
                found: parser.current_token().value.clone(),
                message: String::from("expected a literal or identifier"),
            },
            parser.current_token().span,
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprId,
    bp: BindingPower,
) -> Result<ExprId, Diagnostic> {
    let operator = parser.advance().clone();

    // Same minimum power on the right makes the operator left-associative
    let right = parse_expr(parser, bp)?;

    let span = Span {
        start: parser.expr_span(left).start,
        end: parser.expr_span(right).end,
    };
    Ok(parser.alloc_expr(Expr::Binary {
        left,
        operator,
        right,
        span,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprId, Diagnostic> {
    let operator = parser.advance().clone();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    let span = Span {
        start: operator.span.start,
        end: parser.expr_span(operand).end,
    };
    Ok(parser.alloc_expr(Expr::Unary {
        operator,
        operand,
        span,
    }))
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: ExprId,
    _bp: BindingPower,
) -> Result<ExprId, Diagnostic> {
    let operator = parser.advance().clone();

    // Assignment is right-associative: the right-hand side may itself be a
    // full assignment chain
    let right = parse_expr(parser, BindingPower::Default)?;

    let span = Span {
        start: parser.expr_span(left).start,
        end: parser.expr_span(right).end,
    };
    Ok(parser.alloc_expr(Expr::Binary {
        left,
        operator,
        right,
        span,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprId, Diagnostic> {
    let start = parser.advance().span.start;
    let inner = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::CloseParen)?.span.end;

    Ok(parser.alloc_expr(Expr::Parenthesized {
        inner,
        span: Span { start, end },
    }))
}

pub fn parse_array_literal_expr(parser: &mut Parser) -> Result<ExprId, Diagnostic> {
    let start = parser.advance().span.start;

    let mut elements = vec![];
    if parser.current_token_kind() != TokenKind::CloseBracket {
        loop {
            elements.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    let end = parser.expect(TokenKind::CloseBracket)?.span.end;

    Ok(parser.alloc_expr(Expr::Literal {
        value: LiteralValue::Array(elements),
        span: Span { start, end },
    }))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprId,
    _bp: BindingPower,
) -> Result<ExprId, Diagnostic> {
    parser.advance();

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            match parse_expr(parser, BindingPower::Default) {
                Ok(argument) => arguments.push(argument),
                Err(diagnostic) => {
                    // Local recovery: keep a placeholder argument and skip
                    // to the next `,` or `)` so the rest of the list still
                    // parses
                    parser.report(diagnostic);
                    let span = parser.current_token().span;
                    arguments.push(parser.alloc_expr(Expr::Error { span }));

                    while !matches!(
                        parser.current_token_kind(),
                        TokenKind::Comma
                            | TokenKind::CloseParen
                            | TokenKind::Semicolon
                            | TokenKind::EOF
                    ) {
                        parser.advance();
                    }
                }
            }

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    let end = parser.expect(TokenKind::CloseParen)?.span.end;

    let span = Span {
        start: parser.expr_span(left).start,
        end,
    };
    Ok(parser.alloc_expr(Expr::Call {
        callee: left,
        arguments,
        span,
    }))
}

pub fn parse_member_expr(
    parser: &mut Parser,
    left: ExprId,
    _bp: BindingPower,
) -> Result<ExprId, Diagnostic> {
    let operator = parser.advance().clone();

    let error = Diagnostic::new(
        DiagnosticKind::UnexpectedTokenDetailed {
            found: parser.current_token().value.clone(),
            message: String::from("expected an identifier after member access"),
        },
        parser.current_token().span,
    );
    let property = parser.expect_error(TokenKind::Identifier, Some(error))?;

    let span = Span {
        start: parser.expr_span(left).start,
        end: property.span.end,
    };
    Ok(parser.alloc_expr(Expr::Member {
        object: left,
        property: property.value,
        property_span: property.span,
        static_access: operator.kind == TokenKind::ColonColon,
        span,
    }))
}

pub fn parse_cast_expr(
    parser: &mut Parser,
    left: ExprId,
    _bp: BindingPower,
) -> Result<ExprId, Diagnostic> {
    parser.advance();

    // `as` switches to type-position: the right-hand side goes through the
    // type grammar, never the expression grammar
    let target = parse_type(parser, BindingPower::Default)?;

    let span = Span {
        start: parser.expr_span(left).start,
        end: parser.type_span(target).end,
    };
    Ok(parser.alloc_expr(Expr::Cast {
        value: left,
        target,
        span,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<ExprId, Diagnostic> {
    let start = parser.advance().span.start;

    let parameters = parse_parameter_list(parser)?;

    let return_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    let body = parse_block_stmt(parser)?;

    let span = Span {
        start,
        end: parser.stmt_span(body).end,
    };
    Ok(parser.alloc_expr(Expr::Function {
        parameters,
        return_type,
        body,
        span,
    }))
}
