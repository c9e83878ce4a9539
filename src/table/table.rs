use std::fmt::Display;

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    evaluator::evaluator::Evaluator,
    parser::parser::parse,
    registry::registry::IdentifierRegistry,
    Position,
};

use super::enumerator::Assignments;

/// Hard ceiling on variables, rows are counted in a `u64`.
pub const MAX_SUPPORTED_VARIABLES: usize = 63;

/// Limits applied while building a table.
///
/// The default only enforces [`MAX_SUPPORTED_VARIABLES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Expressions with more distinct variables are rejected before any row
    /// is enumerated. Values above [`MAX_SUPPORTED_VARIABLES`] are clamped.
    pub max_variables: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            max_variables: MAX_SUPPORTED_VARIABLES,
        }
    }
}

/// A complete truth table.
///
/// The header lists the variables in first-occurrence order followed by the
/// expression text. Each row holds one assignment followed by the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    header: Vec<String>,
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn variables(&self) -> &[String] {
        &self.header[..self.header.len() - 1]
    }

    pub fn expression(&self) -> &str {
        &self.header[self.header.len() - 1]
    }

    /// The result column, in row order.
    pub fn results(&self) -> Vec<bool> {
        self.rows
            .iter()
            .filter_map(|row| row.last().copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header row followed by every row with cells rendered as `"true"` / `"false"`.
    pub fn to_cells(&self) -> Vec<Vec<String>> {
        let mut cells = Vec::with_capacity(self.rows.len() + 1);
        cells.push(self.header.clone());

        for row in &self.rows {
            cells.push(row.iter().map(|value| value.to_string()).collect());
        }

        cells
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self.to_cells();
        let widths: Vec<usize> = (0..self.header.len())
            .map(|column| {
                cells
                    .iter()
                    .map(|row| row[column].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (index, row) in cells.iter().enumerate() {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{}", line.trim_end())?;

            if index == 0 {
                let rule = widths
                    .iter()
                    .map(|width| "-".repeat(*width))
                    .collect::<Vec<_>>()
                    .join("-+-");
                writeln!(f, "{}", rule)?;
            }
        }

        Ok(())
    }
}

/// Builds the truth table of `expression` with the default [`TableConfig`].
pub fn build_table(expression: &str) -> Result<TruthTable, Error> {
    build_table_with(expression, &TableConfig::default())
}

/// Parses `expression`, enumerates every assignment of its variables and
/// evaluates the expression once per assignment.
///
/// The first parse or evaluation error is returned as is; no partial table
/// is produced.
pub fn build_table_with(expression: &str, config: &TableConfig) -> Result<TruthTable, Error> {
    let mut registry = IdentifierRegistry::new();
    let expr = parse(expression, &mut registry)?;

    let max = config.max_variables.min(MAX_SUPPORTED_VARIABLES);
    let too_many_variables = || {
        Error::new(
            ErrorImpl::TooManyVariables {
                count: registry.len(),
                max,
            },
            Position::null(),
        )
    };

    if registry.len() > max {
        return Err(too_many_variables());
    }

    let evaluator = Evaluator::new(&registry);
    let assignments = Assignments::new(registry.len()).ok_or_else(too_many_variables)?;
    debug!(
        "building {} row(s) over {:?}",
        assignments.len(),
        registry.names()
    );

    let mut rows = Vec::with_capacity(assignments.len());
    for mut row in assignments {
        let result = evaluator.evaluate(&expr, &row)?;
        trace!("{:?} => {}", row, result);

        row.push(result);
        rows.push(row);
    }

    let mut header = registry.names().to_vec();
    header.push(String::from(expression));

    Ok(TruthTable { header, rows })
}
