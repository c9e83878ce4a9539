//! Utility macros for the tokenizer.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for a single operator glyph
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "p".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for an operator glyph.
///
/// Generates a handler function that emits a token of the given kind
/// carrying the glyph as its value. The lexer advances past the match.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal glyph
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^∧").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::And, "∧"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |_matched: &str, span: Span| Some(MK_TOKEN!($kind, String::from($value), span))
    };
}
