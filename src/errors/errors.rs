use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} (at offset {})", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnmatchedParenthesis => "UnmatchedParenthesis",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::UnsupportedNode { .. } => "UnsupportedNode",
            ErrorImpl::UnknownIdentifier { .. } => "UnknownIdentifier",
            ErrorImpl::TooManyVariables { .. } => "TooManyVariables",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "Expression ended early, expected a variable or `(`",
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss an operator?",
                token
            )),
            ErrorImpl::UnmatchedParenthesis => {
                ErrorTip::Suggestion(String::from("Expected `)` to close the group"))
            }
            ErrorImpl::UnknownOperator { operator } => {
                ErrorTip::Suggestion(format!("`{}` is not a binary operator", operator))
            }
            ErrorImpl::UnsupportedNode { .. } => ErrorTip::Suggestion(String::from(
                "Assignments can be parsed but have no truth value",
            )),
            ErrorImpl::UnknownIdentifier { .. } => ErrorTip::None,
            ErrorImpl::TooManyVariables { count, max } => ErrorTip::Suggestion(format!(
                "{} variables would need 2^{} rows, the limit is {}",
                count, count, max
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected `)` to close parenthesis")]
    UnmatchedParenthesis,
    #[error("unknown operator: {operator:?}")]
    UnknownOperator { operator: String },
    #[error("unsupported syntax node: {node}")]
    UnsupportedNode { node: String },
    #[error("identifier {identifier:?} is not registered")]
    UnknownIdentifier { identifier: String },
    #[error("too many variables: {count} (max {max})")]
    TooManyVariables { count: usize, max: usize },
}
