//! Parser implementation for building the expression tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser drives the lexer one token at a time through a single token
//! of lookahead and dispatches on lookup tables for:
//! - NUD (null denotation) handlers for prefix and primary expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    registry::registry::IdentifierRegistry,
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup,
    },
};

/// The main parser structure that maintains parsing state.
///
/// The parser owns the lexer for the expression being parsed and borrows
/// the identifier registry that the lexer fills as tokens are consumed.
pub struct Parser<'a> {
    /// Token source, positioned after the last consumed token
    lexer: Lexer,
    /// Variables seen so far, in first-occurrence order
    registry: &'a mut IdentifierRegistry,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser with empty lookup tables.
    pub fn new(registry: &'a mut IdentifierRegistry) -> Self {
        Parser {
            lexer: Lexer::default(),
            registry,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Restarts on `source`. Clears the registry.
    pub fn reset(&mut self, source: &str) {
        self.lexer.reset(source, self.registry);
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<Token> {
        self.lexer.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.lexer.peek().map(|token| token.kind)
    }

    /// Consumes the current token and returns it.
    ///
    /// Fails with `UnexpectedEndOfInput` when no tokens remain.
    pub fn advance(&mut self) -> Result<Token, Error> {
        match self.lexer.next(self.registry) {
            Some(token) => Ok(token),
            None => Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput,
                self.get_end_position(),
            )),
        }
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => self.advance(),
            Some(token) => Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken { token: token.value },
                    token.span.start,
                )
            })),
            None => Err(error.unwrap_or_else(|| {
                Error::new(ErrorImpl::UnexpectedEndOfInput, self.get_end_position())
            })),
        }
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Binding power of `kind`, `Default` for tokens that cannot continue an expression.
    pub fn get_binding_power(&self, kind: TokenKind) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&kind)
            .unwrap_or(&BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix tokens get no binding power: an identifier or `(` directly
    /// after a complete expression ends it rather than continuing it.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn get_registry(&self) -> &IdentifierRegistry {
        &*self.registry
    }

    /// Returns the position one past the end of the source.
    pub fn get_end_position(&self) -> Position {
        Position(self.lexer.source().len() as u32)
    }

    /// Start of the current token, or the end of the source when none remain.
    pub fn get_lookahead_position(&self) -> Position {
        self.current_token()
            .map(|token| token.span.start)
            .unwrap_or_else(|| self.get_end_position())
    }
}

/// Parses one expression into a tree.
///
/// This is the main entry point for parsing. It resets `registry`, parses a
/// single expression and requires that no tokens remain. On success the
/// registry holds every variable of the expression in first-occurrence order.
///
/// # Arguments
///
/// * `source` - The expression text
/// * `registry` - Registry to fill with the expression's variables
///
/// # Returns
///
/// The root expression, or the first error encountered.
pub fn parse(source: &str, registry: &mut IdentifierRegistry) -> Result<Expr, Error> {
    let mut parser = Parser::new(registry);
    create_token_lookups(&mut parser);
    parser.reset(source);

    debug!("parsing {:?}", source);

    let expr = parse_expr(&mut parser, BindingPower::Default)?;

    if let Some(token) = parser.current_token() {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.span.start,
        ));
    }

    debug!(
        "parsed {:?} with variables {:?}",
        source,
        parser.get_registry().names()
    );

    Ok(expr)
}
