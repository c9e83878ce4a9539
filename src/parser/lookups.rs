use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Logical,
    Unary,
}

pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);

    // Logical, deliberately one tier so that mixed operators group left to right
    parser.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::Implies, BindingPower::Logical, parse_binary_expr);

    // Prefix and primary
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Tilde, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
