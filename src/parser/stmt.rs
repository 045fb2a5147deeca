use crate::{
    ast::{
        ast::StmtId,
        statements::{AttributeArgument, EnumVariant, Field, Parameter, Stmt, SwitchCase},
    },
    diagnostics::diagnostics::{Diagnostic, DiagnosticKind},
    lexer::tokens::TokenKind,
    Span,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser, types::parse_type};

/// Parses one statement with recovery.
///
/// On failure the diagnostic is recorded, the cursor synchronizes to the
/// next statement boundary, and an error placeholder statement is returned
/// so the enclosing sequence keeps its source order.
pub fn parse_stmt(parser: &mut Parser) -> StmtId {
    let entry = parser.cursor();
    let start = parser.current_token().span.start;

    match try_parse_stmt(parser) {
        Ok(stmt) => stmt,
        Err(diagnostic) => {
            parser.report(diagnostic);
            parser.synchronize();

            // Guarantee forward progress even when the offending token is
            // itself a boundary
            if parser.cursor() == entry {
                parser.advance();
            }

            let span = Span {
                start,
                end: parser.previous_end(),
            };
            parser.alloc_stmt(Stmt::Error { span })
        }
    }
}

fn try_parse_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        return handler(parser);
    }

    // Fall through to an expression statement with a mandatory semicolon
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    let span = Span {
        start: parser.expr_span(expression).start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Expression { expression, span }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start_token = parser.advance().clone();
    let is_constant = start_token.kind == TokenKind::Const;

    let error = Diagnostic::new(
        DiagnosticKind::UnexpectedTokenDetailed {
            found: parser.current_token().value.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.current_token().span,
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let ty = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    // The initializer is mandatory for both forms
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    // `const` tolerates a missing trailing semicolon; `let` does not
    if is_constant {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
        }
    } else {
        parser.expect(TokenKind::Semicolon)?;
    }

    let span = Span {
        start: start_token.span.start,
        end: parser.previous_end(),
    };
    let stmt = if is_constant {
        Stmt::ConstDecl {
            name,
            ty,
            value,
            span,
        }
    } else {
        Stmt::LetDecl {
            name,
            ty,
            value,
            span,
        }
    };
    Ok(parser.alloc_stmt(stmt))
}

/// Parses `( name: Type, ... )`. The list may be empty; a trailing comma is
/// not allowed.
pub fn parse_parameter_list(parser: &mut Parser) -> Result<Vec<Parameter>, Diagnostic> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let name_token = parser.expect(TokenKind::Identifier)?;
            parser.expect(TokenKind::Colon)?;
            let ty = parse_type(parser, BindingPower::Default)?;

            let span = Span {
                start: name_token.span.start,
                end: parser.type_span(ty).end,
            };
            parameters.push(Parameter {
                name: name_token.value,
                ty,
                span,
            });

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(parameters)
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let name = parser.expect(TokenKind::Identifier)?.value;
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
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::FunctionDecl {
        name,
        parameters,
        return_type,
        body,
        span,
    }))
}

pub fn parse_type_decl_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assignment)?;
    let aliased = parse_type(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::TypeDecl {
        name,
        aliased,
        span,
    }))
}

pub fn parse_struct_decl_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::OpenCurly)?;

    let mut fields = vec![];
    if parser.current_token_kind() != TokenKind::CloseCurly {
        loop {
            let field_token = parser.expect(TokenKind::Identifier)?;
            parser.expect(TokenKind::Colon)?;
            let ty = parse_type(parser, BindingPower::Default)?;

            let span = Span {
                start: field_token.span.start,
                end: parser.type_span(ty).end,
            };
            fields.push(Field {
                name: field_token.value,
                ty,
                span,
            });

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::StructDecl { name, fields, span }))
}

pub fn parse_enum_decl_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::OpenCurly)?;

    let mut variants = vec![];
    if parser.current_token_kind() != TokenKind::CloseCurly {
        loop {
            let variant = parser.expect(TokenKind::Identifier)?;
            variants.push(EnumVariant {
                name: variant.value,
                span: variant.span,
            });

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::EnumDecl {
        name,
        variants,
        span,
    }))
}

pub fn parse_import_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let name = parser.expect(TokenKind::Identifier)?.value;

    let from = if parser.current_token_kind() == TokenKind::From {
        parser.advance();
        Some(parser.expect(TokenKind::String)?.value)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Import { name, from, span }))
}

pub fn parse_export_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Semicolon)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Export { name, span }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_block = parse_block_stmt(parser)?;

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        if parser.current_token_kind() == TokenKind::If {
            Some(parse_if_stmt(parser)?)
        } else {
            Some(parse_block_stmt(parser)?)
        }
    } else {
        None
    };

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::If {
        condition,
        then_block,
        else_branch,
        span,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block_stmt(parser)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::While {
        condition,
        body,
        span,
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let binding = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::In)?;
    let iterable = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block_stmt(parser)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::For {
        binding,
        iterable,
        body,
        span,
    }))
}

pub fn parse_loop_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let body = parse_block_stmt(parser)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Loop { body, span }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Return { value, span }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;
    parser.expect(TokenKind::Semicolon)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Break { span }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;
    parser.expect(TokenKind::Semicolon)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Continue { span }))
}

pub fn parse_switch_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let scrutinee = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut cases = vec![];
    let mut default = None;

    loop {
        match parser.current_token_kind() {
            TokenKind::Case => {
                let case_start = parser.advance().span.start;
                let value = parse_expr(parser, BindingPower::Default)?;
                parser.expect(TokenKind::Colon)?;
                let body = parse_block_stmt(parser)?;

                cases.push(SwitchCase {
                    value,
                    body,
                    span: Span {
                        start: case_start,
                        end: parser.previous_end(),
                    },
                });
            }
            TokenKind::Default => {
                let default_token = parser.advance().clone();
                parser.expect(TokenKind::Colon)?;
                let body = parse_block_stmt(parser)?;

                // At most one default clause; the first one wins
                if default.is_none() {
                    default = Some(body);
                } else {
                    parser.report(Diagnostic::new(
                        DiagnosticKind::DuplicateDefaultClause,
                        default_token.span,
                    ));
                }
            }
            TokenKind::CloseCurly => break,
            _ => {
                return Err(Diagnostic::new(
                    DiagnosticKind::UnexpectedTokenDetailed {
                        found: parser.current_token().value.clone(),
                        message: String::from("expected `case`, `default` or `}` in switch body"),
                    },
                    parser.current_token().span,
                ));
            }
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Switch {
        scrutinee,
        cases,
        default,
        span,
    }))
}

/// Parses `module name { ... }` and `namespace name { ... }`; the two share
/// a shape and differ only in the leading keyword.
pub fn parse_module_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start_token = parser.advance().clone();

    let name = parser.expect(TokenKind::Identifier)?.value;
    let body = parse_block_stmt(parser)?;

    let span = Span {
        start: start_token.span.start,
        end: parser.previous_end(),
    };
    let stmt = if start_token.kind == TokenKind::Namespace {
        Stmt::Namespace { name, body, span }
    } else {
        Stmt::Module { name, body, span }
    };
    Ok(parser.alloc_stmt(stmt))
}

pub fn parse_defer_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    // The parser only records the deferred expression; scope-exit execution
    // belongs to a later evaluation stage
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Defer { expression, span }))
}

/// Parses `@name [argument] [as alias] [;]`.
///
/// The argument is a string, a bare identifier, or a parenthesized
/// comma-separated expression list.
pub fn parse_attribute_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.advance().span.start;

    let name = parser.expect(TokenKind::Identifier)?.value;

    let argument = match parser.current_token_kind() {
        TokenKind::String => Some(AttributeArgument::String(parser.advance().value.clone())),
        TokenKind::Identifier => {
            Some(AttributeArgument::Identifier(parser.advance().value.clone()))
        }
        TokenKind::OpenParen => {
            parser.advance();

            let mut expressions = vec![];
            if parser.current_token_kind() != TokenKind::CloseParen {
                loop {
                    expressions.push(parse_expr(parser, BindingPower::Default)?);

                    if parser.current_token_kind() == TokenKind::Comma {
                        parser.advance();
                    } else {
                        break;
                    }
                }
            }

            parser.expect(TokenKind::CloseParen)?;
            Some(AttributeArgument::Expressions(expressions))
        }
        _ => None,
    };

    let alias = if parser.current_token_kind() == TokenKind::As {
        parser.advance();
        Some(parser.expect(TokenKind::Identifier)?.value)
    } else {
        None
    };

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Attribute {
        name,
        argument,
        alias,
        span,
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<StmtId, Diagnostic> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut statements = vec![];
    loop {
        for comment in parser.take_leading_comments() {
            statements.push(comment);
        }

        if parser.current_token_kind() == TokenKind::CloseCurly || !parser.has_tokens() {
            break;
        }

        statements.push(parse_stmt(parser));
    }

    parser.expect(TokenKind::CloseCurly)?;

    let span = Span {
        start,
        end: parser.previous_end(),
    };
    Ok(parser.alloc_stmt(Stmt::Block { statements, span }))
}
