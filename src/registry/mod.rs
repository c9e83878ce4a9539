//! Identifier registry shared by the lexer, parser and evaluator of a
//! single truth table build.

pub mod registry;
