use alloc::vec::Vec;
use core::mem;

use crate::error::ParseError;
use super::{expression::{ExpressionNode, Operator}, token::Token};

/// An element of the working sequence while a tree is being built. Operands start out as numeric
/// leaves, and are replaced by larger subtrees as operators and parenthesized groups are folded.
#[derive(PartialEq, Debug, Clone)]
enum Item {
    Operand(ExpressionNode),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl From<&Token> for Item {
    fn from(token: &Token) -> Self {
        match *token {
            Token::Number(n) => Item::Operand(ExpressionNode::Number(n)),
            Token::Operator(op) => Item::Operator(op),
            Token::LeftParen => Item::LeftParen,
            Token::RightParen => Item::RightParen,
        }
    }
}

/// Converts a flat list of tokens into a single expression tree, by repeatedly folding the
/// highest-precedence operator into a node together with its neighbours.
pub struct Parser {
    items: Vec<Item>,
}

/// Builds an expression tree from a sequence of tokens.
pub fn build(tokens: &[Token]) -> Result<ExpressionNode, ParseError> {
    Parser::new(tokens).parse()
}

impl Parser {
    pub fn new(tokens: &[Token]) -> Parser {
        Parser { items: tokens.iter().map(Item::from).collect() }
    }

    pub fn parse(mut self) -> Result<ExpressionNode, ParseError> {
        self.resolve_parentheses()?;

        for level in Operator::PRECEDENCE_LEVELS.iter() {
            self.resolve_level(level)?;
        }

        self.finish()
    }

    /// Replaces every parenthesized group, outermost first, with the tree built from its contents.
    fn resolve_parentheses(&mut self) -> Result<(), ParseError> {
        self.drop_unmatched_parentheses();

        while let Some((start, end)) = self.find_group() {
            let mut group = self.items.drain(start..=end).collect::<Vec<_>>();
            group.pop();
            group.remove(0);

            if group.is_empty() {
                return Err(ParseError::MalformedExpression("empty parenthesized group"));
            }

            let subtree = Parser { items: group }.parse()?;
            log::trace!("resolved group at {}..={} into {} nodes", start, end, subtree.size());
            self.items.insert(start, Item::Operand(subtree));
        }

        Ok(())
    }

    /// Removes parentheses which have no partner. A `)` is unmatched if it would take the nesting
    /// depth below zero reading left-to-right, and a `(` is unmatched if it would do the same
    /// reading right-to-left. An expression with only one kind of parenthesis loses all of them.
    fn drop_unmatched_parentheses(&mut self) {
        let mut unmatched = Vec::new();

        let mut depth = 0usize;
        for (i, item) in self.items.iter().enumerate() {
            match item {
                Item::LeftParen => depth += 1,
                Item::RightParen if depth == 0 => unmatched.push(i),
                Item::RightParen => depth -= 1,
                _ => (),
            }
        }

        let mut depth = 0usize;
        for (i, item) in self.items.iter().enumerate().rev() {
            match item {
                Item::RightParen if !unmatched.contains(&i) => depth += 1,
                Item::LeftParen if depth == 0 => unmatched.push(i),
                Item::LeftParen => depth -= 1,
                _ => (),
            }
        }

        if unmatched.is_empty() {
            return;
        }

        log::debug!("dropping {} unmatched parentheses", unmatched.len());
        let mut index = 0;
        self.items.retain(|_| {
            let keep = !unmatched.contains(&index);
            index += 1;
            keep
        });
    }

    /// Finds the first top-level group, returning the indices of its opening and closing
    /// parentheses. Parentheses must already be balanced.
    fn find_group(&self) -> Option<(usize, usize)> {
        let start = self.items.iter().position(|item| *item == Item::LeftParen)?;

        let mut depth = 0usize;
        for (i, item) in self.items.iter().enumerate().skip(start) {
            match item {
                Item::LeftParen => depth += 1,
                Item::RightParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((start, i));
                    }
                }
                _ => (),
            }
        }

        None
    }

    /// Folds every operator in one precedence level, left to right, so that the leftmost
    /// occurrence binds first. Each fold takes the operand already emitted on its left and the
    /// next item on its right, so the whole level is one pass.
    fn resolve_level(&mut self, level: &[Operator]) -> Result<(), ParseError> {
        let mut folded = Vec::with_capacity(self.items.len());
        let mut items = mem::take(&mut self.items).into_iter();

        while let Some(item) = items.next() {
            let op = match item {
                Item::Operator(op) if level.contains(&op) => op,
                other => {
                    folded.push(other);
                    continue;
                }
            };

            let node = match (folded.pop(), items.next()) {
                (Some(Item::Operand(left)), Some(Item::Operand(right)))
                    => ExpressionNode::operation(op, left, right),
                _ => return Err(ParseError::MalformedExpression("operator is missing an operand")),
            };

            log::trace!("folded {}", op);
            folded.push(Item::Operand(node));
        }

        self.items = folded;
        Ok(())
    }

    /// Takes the single remaining operand as the root of the tree.
    fn finish(mut self) -> Result<ExpressionNode, ParseError> {
        match self.items.len() {
            0 => Err(ParseError::MalformedExpression("no operands")),
            1 => match self.items.pop() {
                Some(Item::Operand(node)) => Ok(node),
                _ => Err(ParseError::MalformedExpression("operator is missing an operand")),
            },
            _ => Err(ParseError::MalformedExpression("operands without an operator between them")),
        }
    }
}
