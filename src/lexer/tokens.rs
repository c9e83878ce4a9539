use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,

    Tilde, // ~

    OpenParen,
    CloseParen,

    And,     // ∧
    Or,      // ∨
    Implies, // ⇒

    Assignment, // =
}

impl TokenKind {
    /// Everything but an identifier is a single operator glyph.
    pub fn is_operator(&self) -> bool {
        !matches!(self, TokenKind::Identifier)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }
}
