//! Evaluation of expression trees under a single assignment of truth values.
//!
//! Every `Expr` variant is handled explicitly. Assignments are accepted by
//! the grammar but rejected here with `UnsupportedNode`.

pub mod evaluator;
