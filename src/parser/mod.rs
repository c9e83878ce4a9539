//! Parser module for building the expression tree.
//!
//! This module contains the parser that turns the token stream of one
//! expression into an `Expr`. It uses a Pratt parser with one token of
//! lookahead and handles:
//!
//! - Negation, grouping and identifiers
//! - Binary operators that share a single precedence tier and associate left
//! - Right-associative assignment to a bare identifier
//! - Error reporting for malformed input
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
