use alloc::{boxed::Box, string::{String, ToString}, vec, vec::Vec};
use core::{fmt, mem, str::FromStr};

use num_traits::Float;

use crate::error::EvalError;
use crate::nav::NodePath;

/// One of the fixed set of binary operators.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Operator {
    Power,
    Multiply,
    Divide,
    Add,
    Subtract,
}

impl Operator {
    /// Every operator, grouped into precedence levels from highest to lowest. Operators sharing a
    /// level are folded together in one left-to-right sweep.
    pub const PRECEDENCE_LEVELS: [&'static [Operator]; 3] = [
        &[Operator::Power],
        &[Operator::Multiply, Operator::Divide],
        &[Operator::Add, Operator::Subtract],
    ];

    pub fn symbol(&self) -> char {
        match self {
            Operator::Power => '^',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '^' => Some(Operator::Power),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            _ => None,
        }
    }

    /// The index of this operator's level in [PRECEDENCE_LEVELS](#associatedconstant.PRECEDENCE_LEVELS);
    /// lower binds tighter.
    pub fn precedence(&self) -> usize {
        match self {
            Operator::Power => 0,
            Operator::Multiply | Operator::Divide => 1,
            Operator::Add | Operator::Subtract => 2,
        }
    }

    /// Applies this operator to two numbers.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        Ok(match self {
            Operator::Power => Float::powf(left, right),
            Operator::Multiply => left * right,
            Operator::Divide => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero)
                }
                left / right
            }
            Operator::Add => left + right,
            Operator::Subtract => left - right,
        })
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    /// Accepts the five operator symbols, plus `**` as another spelling of power.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "**" {
            return Ok(Operator::Power);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_char(c),
            _ => None,
        }.ok_or_else(|| EvalError::InvalidOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of a binary expression tree.
///
/// A node is either a numeric leaf, or an operation which owns exactly two children.
///
/// Evaluating, measuring and dropping a tree don't recurse, so trees of any depth are fine for
/// those. [Display](#impl-Display-for-ExpressionNode), `Clone`, `PartialEq` and layout do recurse
/// once per level.
#[derive(PartialEq, Debug, Clone)]
pub enum ExpressionNode {
    Number(f64),
    Operation(Operator, Box<ExpressionNode>, Box<ExpressionNode>),
}

impl ExpressionNode {
    pub fn operation(op: Operator, left: ExpressionNode, right: ExpressionNode) -> ExpressionNode {
        ExpressionNode::Operation(op, Box::new(left), Box::new(right))
    }

    /// Like [operation](#method.operation), but takes the operator as a symbol, for callers
    /// building trees from their own input.
    pub fn operation_from_symbol(symbol: &str, left: ExpressionNode, right: ExpressionNode) -> Result<ExpressionNode, EvalError> {
        Ok(ExpressionNode::operation(symbol.parse()?, left, right))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ExpressionNode::Number(_))
    }

    /// The children of this node, left before right. Leaves have none.
    pub fn children(&self) -> Vec<&ExpressionNode> {
        match self {
            ExpressionNode::Number(_) => vec![],
            ExpressionNode::Operation(_, left, right) => vec![&**left, &**right],
        }
    }

    /// The text drawn for this node: the operator symbol, or the number.
    pub fn label(&self) -> String {
        match self {
            ExpressionNode::Number(n) => n.to_string(),
            ExpressionNode::Operation(op, _, _) => op.to_string(),
        }
    }

    /// The total number of nodes in this tree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// The number of edges on the longest path from this node to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut this_level = self.children();
        while !this_level.is_empty() {
            height += 1;
            this_level = this_level.iter().flat_map(|n| n.children()).collect();
        }
        height
    }

    /// The labels of this tree grouped by depth, each level read left to right.
    pub fn levels(&self) -> Vec<Vec<String>> {
        let mut levels = vec![];
        let mut this_level = vec![self];

        while !this_level.is_empty() {
            levels.push(this_level.iter().map(|n| n.label()).collect());
            this_level = this_level.iter().flat_map(|n| n.children()).collect();
        }

        levels
    }

    /// Evaluates this tree into a number, children before parents and left before right.
    ///
    /// Works through an explicit stack rather than recursing, so long chains such as
    /// `1 + 1 + ... + 1` evaluate no matter how deep their tree is.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        let mut steps = vec![Step::Visit(self)];
        let mut values: Vec<f64> = vec![];

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(ExpressionNode::Number(n)) => values.push(*n),
                Step::Visit(ExpressionNode::Operation(op, left, right)) => {
                    steps.push(Step::Apply(*op));
                    steps.push(Step::Visit(&**right));
                    steps.push(Step::Visit(&**left));
                }
                Step::Apply(op) => match (values.pop(), values.pop()) {
                    (Some(right), Some(left)) => values.push(op.apply(left, right)?),
                    _ => unreachable!("operation applied without both operands"),
                },
            }
        }

        match values.pop() {
            Some(value) => Ok(value),
            None => unreachable!("evaluation finished without a result"),
        }
    }

    /// Evaluates this tree and replaces it with a single leaf holding the result. If evaluation
    /// fails, the tree is left as it was.
    pub fn collapse(&mut self) -> Result<f64, EvalError> {
        let value = self.evaluate()?;
        *self = ExpressionNode::Number(value);
        Ok(value)
    }

    /// Follows a path of child indices from this node, returning the node it ends on.
    pub fn subtree(&self, path: &NodePath) -> Option<&ExpressionNode> {
        let mut node = self;
        for &index in path.indices() {
            node = match node {
                ExpressionNode::Operation(_, left, right) => match index {
                    0 => &**left,
                    1 => &**right,
                    _ => return None,
                },
                ExpressionNode::Number(_) => return None,
            };
        }
        Some(node)
    }

    /// Mutable version of [subtree](#method.subtree).
    pub fn subtree_mut(&mut self, path: &NodePath) -> Option<&mut ExpressionNode> {
        let mut node = self;
        for &index in path.indices() {
            node = match node {
                ExpressionNode::Operation(_, left, right) => match index {
                    0 => &mut **left,
                    1 => &mut **right,
                    _ => return None,
                },
                ExpressionNode::Number(_) => return None,
            };
        }
        Some(node)
    }
}

/// A pending piece of work for [ExpressionNode::evaluate].
enum Step<'a> {
    Visit(&'a ExpressionNode),
    Apply(Operator),
}

impl Drop for ExpressionNode {
    // Unlinks children onto a heap stack instead of letting each `Box` drop its subtree
    // recursively
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let ExpressionNode::Operation(_, left, right) = self {
            stack.push(mem::replace(&mut **left, ExpressionNode::Number(0.0)));
            stack.push(mem::replace(&mut **right, ExpressionNode::Number(0.0)));
        }

        while let Some(mut node) = stack.pop() {
            if let ExpressionNode::Operation(_, left, right) = &mut node {
                stack.push(mem::replace(&mut **left, ExpressionNode::Number(0.0)));
                stack.push(mem::replace(&mut **right, ExpressionNode::Number(0.0)));
            }
        }
    }
}

impl From<f64> for ExpressionNode {
    fn from(n: f64) -> Self {
        ExpressionNode::Number(n)
    }
}

impl fmt::Display for ExpressionNode {
    /// Writes the tree as fully-parenthesised infix, e.g. `((2 + 3) * 4)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExpressionNode::Number(n) => write!(f, "{}", n),
            ExpressionNode::Operation(op, left, right) => write!(f, "({} {} {})", left, op, right),
        }
    }
}
