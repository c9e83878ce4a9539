//! Truth table construction.
//!
//! This module ties the pipeline together:
//!
//! - `enumerator` produces every assignment of truth values in table order
//! - `table` parses the expression, evaluates it once per assignment and
//!   assembles the header and rows

pub mod enumerator;
pub mod table;
