//! An abstraction for something which can be evaluated into a number.
//!
//! Currently, this is only implemented for [ExpressionNode](crate::ExpressionNode). Front-ends
//! which keep their own tree types can implement it to share evaluation code paths, such as
//! collapsing a selected subtree, with the built-in tree.

use crate::error::EvalError;
use crate::nav::NodePath;
use crate::node::expression::ExpressionNode;

/// Something which can be evaluated into a number.
pub trait Evaluable {
    /// Evaluates this expression and returns either the result, or an [EvalError] if evaluation
    /// was not successful. The expression is not modified.
    fn evaluate(&self) -> Result<f64, EvalError>;

    /// Evaluates this expression and replaces it with an equivalent expression holding only the
    /// result. If evaluation fails, the expression is left unchanged.
    fn collapse(&mut self) -> Result<f64, EvalError>;

    /// Collapses the part of this expression found by following `path`. Returns `None` if the
    /// path doesn't lead anywhere.
    fn collapse_at(&mut self, path: &NodePath) -> Option<Result<f64, EvalError>>;
}

impl Evaluable for ExpressionNode {
    fn evaluate(&self) -> Result<f64, EvalError> {
        ExpressionNode::evaluate(self)
    }

    fn collapse(&mut self) -> Result<f64, EvalError> {
        ExpressionNode::collapse(self)
    }

    fn collapse_at(&mut self, path: &NodePath) -> Option<Result<f64, EvalError>> {
        let result = self.subtree_mut(path).map(|node| node.collapse());
        if let Some(Ok(value)) = result {
            log::debug!("collapsed subtree at {} into {}", path, value);
        }
        result
    }
}
