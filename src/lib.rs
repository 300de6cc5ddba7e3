//! treecalc turns arithmetic expressions such as `(2 + 3) * pi` into binary syntax trees, evaluates
//! them, and computes tidy 2-D positions for their nodes so a front-end can draw them.
//!
//! The usual pipeline is:
//!
//! ```text
//! text --parse--> ExpressionNode --evaluate--> f64
//!                       |
//!                       +--layout--> LayoutNode --Renderer::draw_all--> drawing surface
//! ```
//!
//! The crate does no I/O of its own; see the `ascii_calc` and `window_calc` demos for front-ends.

#![no_std]
extern crate alloc;

pub mod constants;
pub mod error;
pub mod evaluate;
pub mod layout;
pub mod nav;
pub mod node;
pub mod render;
pub mod renderers;

#[cfg(test)]
mod tests;

pub use crate::{
    constants::ConstantTable,
    error::{EvalError, ParseError},
    evaluate::Evaluable,
    layout::{Layoutable, LayoutNode, LayoutSettings},
    nav::NodePath,
    node::{
        expression::{ExpressionNode, Operator},
        token::Token,
    },
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses an expression using the default [ConstantTable], which knows `pi` and `e`.
pub fn parse(text: &str) -> Result<ExpressionNode, ParseError> {
    parse_with_constants(text, &ConstantTable::default())
}

/// Parses an expression, substituting names from the given constant table.
pub fn parse_with_constants(text: &str, constants: &ConstantTable) -> Result<ExpressionNode, ParseError> {
    let tokens = node::token::tokenize(text, constants)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let tree = node::parser::build(&tokens)?;
    log::debug!("parsed {:?} into a tree of {} nodes", text, tree.size());
    Ok(tree)
}

/// Evaluates a tree into a number without modifying it.
pub fn evaluate(node: &ExpressionNode) -> Result<f64, EvalError> {
    node.evaluate()
}

/// Evaluates a tree and replaces it with a single leaf holding the result.
pub fn collapse(node: &mut ExpressionNode) -> Result<f64, EvalError> {
    node.collapse()
}

/// Computes positions for every node of a tree.
pub fn layout<'a, T: Layoutable>(node: &'a T, settings: &LayoutSettings) -> LayoutNode<'a, T> {
    layout::layout(node, settings)
}
