//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns an expression
//! string into tokens for the parser. It handles:
//!
//! - Classification of operator glyphs and identifiers using regex patterns
//! - Whitespace skipping
//! - Token position tracking for error reporting
//! - Registration of identifiers in first-occurrence order

pub mod lexer;
pub mod tokens;
