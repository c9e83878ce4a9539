#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod registry;
pub mod table;

extern crate regex;

pub use table::table::{build_table, build_table_with, TableConfig, TruthTable};

/// Byte offset into the expression source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(start as u32),
            end: Position(end as u32),
        }
    }
}

/// Returns the character column of a byte offset, clamped to the source length.
pub fn get_column_at_position(source: &str, position: u32) -> usize {
    let pos = (position as usize).min(source.len());

    source
        .char_indices()
        .take_while(|(index, _)| *index < pos)
        .count()
}


/// Renders an error as a caret diagnostic under the offending column.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `q`, did you miss an operator?)
///   |
/// 1 | p q
///   | --^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let column = get_column_at_position(source, error.get_position().0);
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let arrows = column + 1;

    rendered.push_str("  |\n");
    rendered.push_str(&format!("1 | {}\n", source));
    rendered.push_str(&format!("  | {:->arrows$}\n", "^"));
    rendered
}
