use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    registry::registry::IdentifierRegistry,
};

/// Tree-walking evaluator for a parsed expression.
///
/// The evaluator is bound to the registry that was filled while parsing, and
/// resolves each identifier to its slot in an assignment vector through it.
pub struct Evaluator<'a> {
    registry: &'a IdentifierRegistry,
}

impl<'a> Evaluator<'a> {
    pub fn new(registry: &'a IdentifierRegistry) -> Self {
        Evaluator { registry }
    }

    /// Computes the truth value of `expr` under `assignment`.
    ///
    /// `assignment` holds one value per registered identifier, in registry
    /// order. Both operands of a binary node are always evaluated, left first.
    pub fn evaluate(&self, expr: &Expr, assignment: &[bool]) -> Result<bool, Error> {
        match expr {
            Expr::Identifier { name, span } => self
                .registry
                .position(name)
                .and_then(|position| assignment.get(position).copied())
                .ok_or_else(|| {
                    Error::new(
                        ErrorImpl::UnknownIdentifier {
                            identifier: name.clone(),
                        },
                        span.start,
                    )
                }),
            Expr::Grouped { inner, .. } => self.evaluate(inner, assignment),
            Expr::Unary {
                operator, operand, ..
            } => Ok(operator.apply(self.evaluate(operand, assignment)?)),
            Expr::Binary {
                operator,
                left,
                right,
                ..
            } => {
                let left = self.evaluate(left, assignment)?;
                let right = self.evaluate(right, assignment)?;
                Ok(operator.apply(left, right))
            }
            Expr::Assignment { span, .. } => Err(Error::new(
                ErrorImpl::UnsupportedNode {
                    node: expr.get_node_name().to_string(),
                },
                span.start,
            )),
        }
    }
}
