//! Error types and error handling for the truth table pipeline.
//!
//! This module defines the errors raised while tokenizing, parsing and
//! evaluating an expression. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for parsing and evaluation
//! - Helpful error messages and suggestions

pub mod errors;
