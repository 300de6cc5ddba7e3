//! Turning text into expression trees.
//!
//! Text is first split into [tokens](token), which the [parser] then folds into an
//! [ExpressionNode](expression::ExpressionNode) tree, one precedence level at a time. Expression
//! trees can be [evaluated](crate::evaluate) and [laid out](crate::layout).

pub mod expression;
pub mod token;
pub mod parser;
