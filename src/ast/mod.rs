/// AST (Abstract Syntax Tree) module
/// Contains the expression tree and its operators
///
/// Submodules:
/// - ast: Expression variants, unary and binary operators
pub mod ast;
