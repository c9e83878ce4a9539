use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span,
};

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
}

impl UnaryOperator {
    pub fn apply(&self, operand: bool) -> bool {
        match self {
            UnaryOperator::Not => !operand,
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Not => write!(f, "~"),
        }
    }
}

/// Infix operators. All three share one binding power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    And,
    Or,
    Implies,
}

impl BinaryOperator {
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            BinaryOperator::And => left && right,
            BinaryOperator::Or => left || right,
            BinaryOperator::Implies => !left || right,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::And => write!(f, "∧"),
            BinaryOperator::Or => write!(f, "∨"),
            BinaryOperator::Implies => write!(f, "⇒"),
        }
    }
}

impl TryFrom<&Token> for BinaryOperator {
    type Error = Error;

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        match token.kind {
            TokenKind::And => Ok(BinaryOperator::And),
            TokenKind::Or => Ok(BinaryOperator::Or),
            TokenKind::Implies => Ok(BinaryOperator::Implies),
            _ => Err(Error::new(
                ErrorImpl::UnknownOperator {
                    operator: token.value.clone(),
                },
                token.span.start,
            )),
        }
    }
}

/// Expression tree produced by the parser.
///
/// Built once per parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A variable, resolved through the identifier registry at evaluation.
    Identifier { name: String, span: Span },
    Unary {
        operator: UnaryOperator,
        operand: Box<Expr>,
        span: Span,
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
    /// A parenthesized expression. Evaluates to its inner expression.
    Grouped { inner: Box<Expr>, span: Span },
    /// `name = value`. The grammar accepts it, the evaluator rejects it.
    Assignment {
        target: Box<Expr>,
        value: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Grouped { span, .. }
            | Expr::Assignment { span, .. } => span,
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Expr::Identifier { .. })
    }

    pub fn get_node_name(&self) -> &'static str {
        match self {
            Expr::Identifier { .. } => "Identifier",
            Expr::Unary { .. } => "Unary",
            Expr::Binary { .. } => "Binary",
            Expr::Grouped { .. } => "Grouped",
            Expr::Assignment { .. } => "Assignment",
        }
    }
}

/// Renders the tree back to source form. Binary nodes are not bracketed
/// unless they were grouped in the input.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier { name, .. } => write!(f, "{}", name),
            Expr::Unary {
                operator, operand, ..
            } => write!(f, "{}{}", operator, operand),
            Expr::Binary {
                operator,
                left,
                right,
                ..
            } => write!(f, "{} {} {}", left, operator, right),
            Expr::Grouped { inner, .. } => write!(f, "({})", inner),
            Expr::Assignment { target, value, .. } => write!(f, "{} = {}", target, value),
        }
    }
}
