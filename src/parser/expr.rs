use crate::{
    ast::ast::{BinaryOperator, Expr, UnaryOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let Some(token) = parser.current_token() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput,
            parser.get_end_position(),
        ));
    };

    let Some(nud) = parser.get_nud_lookup().get(&token.kind).copied() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.span.start,
        ));
    };

    let mut left = nud(parser)?;

    // While the next token binds tighter than bp, keep extending lhs
    while let Some(token_kind) = parser.current_token_kind() {
        let token_bp = parser.get_binding_power(token_kind);
        if token_bp <= bp {
            break;
        }

        // `=` only follows a bare identifier, anything else leaves it unconsumed
        if token_kind == TokenKind::Assignment && !left.is_identifier() {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    Ok(Expr::Identifier {
        name: token.value,
        span: token.span,
    })
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let operator = BinaryOperator::try_from(&operator_token)?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let operator = match operator_token.kind {
        TokenKind::Tilde => UnaryOperator::Not,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnknownOperator {
                    operator: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary {
        span: Span {
            start: operator_token.span.start,
            end: operand.get_span().end,
        },
        operator,
        operand: Box::new(operand),
    })
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    parser.expect(TokenKind::Assignment)?;

    // Right side restarts at the lowest power, making `a = b = c` nest to the right
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Assignment {
        span: Span {
            start: left.get_span().start,
            end: value.get_span().end,
        },
        target: Box::new(left),
        value: Box::new(value),
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect(TokenKind::OpenParen)?;
    let inner = parse_expr(parser, BindingPower::Default)?;

    let unmatched = Error::new(
        ErrorImpl::UnmatchedParenthesis,
        parser.get_lookahead_position(),
    );
    let close = parser.expect_error(TokenKind::CloseParen, Some(unmatched))?;

    Ok(Expr::Grouped {
        inner: Box::new(inner),
        span: Span {
            start: open.span.start,
            end: close.span.end,
        },
    })
}
