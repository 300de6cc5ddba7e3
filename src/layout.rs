//! Computing positions for the nodes of a tree, so that it can be drawn as a node-and-edge diagram.
//!
//! Layout happens in two passes over a [LayoutNode] tree wrapping the source tree:
//!
//!   1. A post-order pass places every node. Leaves take the next free slot at their depth, and
//!      parents sit above the midpoint of their children. A parent which would land on top of an
//!      already-placed node is pushed right, and the push is recorded as a `shift` to be applied to
//!      its whole subtree later, so nothing to its left ever moves.
//!   2. A pre-order pass carries the sum of the shifts of each node's ancestors down the tree and
//!      adds it to the node's position, turning the recorded shifts into final coordinates.
//!
//! Any two nodes at the same depth end up at least [LayoutSettings::node_spacing] apart. The
//! result only depends on the shape of the tree.

use alloc::{vec, vec::Vec};

use num_traits::Float;

use crate::nav::NodePath;
use crate::node::expression::ExpressionNode;

/// A tree which can be laid out.
pub trait Layoutable {
    /// The children of this node, in the order they should be drawn from left to right.
    fn layout_children(&self) -> Vec<&Self>;
}

impl Layoutable for ExpressionNode {
    fn layout_children(&self) -> Vec<&Self> {
        self.children()
    }
}

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        Float::hypot(self.x - other.x, self.y - other.y)
    }
}

/// The smallest rectangle containing the positions of every node of a layout.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Which way the levels of the tree progress along the y axis.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Direction {
    /// The root has the smallest y coordinate, suited to surfaces with a top-left origin.
    #[default]
    TopDown,

    /// The root has the largest y coordinate, suited to surfaces with a bottom-left origin.
    BottomUp,
}

/// Settings which control the spacing of a layout.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct LayoutSettings {
    /// The minimum horizontal distance between two nodes at the same depth.
    pub node_spacing: f64,

    /// The vertical distance between consecutive depths.
    pub level_spacing: f64,

    /// Added to every coordinate, so the leftmost and topmost nodes aren't placed on the edge.
    pub margin: f64,

    pub direction: Direction,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            node_spacing: 50.0,
            level_spacing: 50.0,
            margin: 25.0,
            direction: Direction::TopDown,
        }
    }
}

/// A positioned node, wrapping a node of the tree which was laid out.
#[derive(PartialEq, Clone, Debug)]
pub struct LayoutNode<'a, T> {
    pub node: &'a T,
    pub x: f64,
    pub y: f64,
    pub depth: usize,

    /// Horizontal offset still waiting to be applied to this node's descendants. Always zero once
    /// [layout] returns.
    pub shift: f64,

    pub children: Vec<LayoutNode<'a, T>>,
}

/// Computes positions for every node of `root`.
///
/// Both passes recurse once per level of the tree, so a tree thousands of levels deep can exhaust
/// the stack. Collapse deep subtrees with [Evaluable::collapse_at](crate::Evaluable::collapse_at)
/// before laying them out.
pub fn layout<'a, T: Layoutable>(root: &'a T, settings: &LayoutSettings) -> LayoutNode<'a, T> {
    let mut tree = LayoutNode::wrap(root, 0);
    let deepest = tree.deepest();

    let mut next_free = vec![0.0; deepest + 1];
    tree.place(&mut next_free, settings.node_spacing);
    tree.apply_shifts(settings.margin, settings, deepest);

    log::debug!("laid out {} nodes across {} levels", tree.node_count(), deepest + 1);
    tree
}

impl<'a, T: Layoutable> LayoutNode<'a, T> {
    fn wrap(node: &'a T, depth: usize) -> Self {
        LayoutNode {
            node,
            x: 0.0,
            y: 0.0,
            depth,
            shift: 0.0,
            children: node
                .layout_children()
                .into_iter()
                .map(|child| LayoutNode::wrap(child, depth + 1))
                .collect(),
        }
    }

    /// The greatest depth of any node in this subtree.
    fn deepest(&self) -> usize {
        self.children.iter().map(|c| c.deepest()).max().unwrap_or(self.depth)
    }

    /// First pass. `next_free` holds, for each depth, the leftmost x at which a node can be placed
    /// without coming too close to the nodes already placed at that depth.
    ///
    /// Returns the greatest depth reached by this subtree.
    fn place(&mut self, next_free: &mut [f64], spacing: f64) -> usize {
        let mut deepest = self.depth;
        for child in self.children.iter_mut() {
            deepest = deepest.max(child.place(next_free, spacing));
        }

        self.x = match self.children.as_slice() {
            [] => next_free[self.depth],
            [only] => only.x,
            [first, .., last] => (first.x + last.x) / 2.0,
        };

        let frontier = next_free[self.depth];
        if self.x < frontier {
            let shift = frontier - self.x;
            self.x += shift;
            self.shift += shift;

            // Placing nodes children-first means this subtree holds the rightmost node of every
            // depth below here, so the frontier moves along with it
            for free in next_free[self.depth + 1..=deepest].iter_mut() {
                *free += shift;
            }
        }

        next_free[self.depth] = self.x + spacing;
        deepest
    }

    /// Second pass. `offset` is the margin plus the total shift recorded on this node's ancestors.
    fn apply_shifts(&mut self, offset: f64, settings: &LayoutSettings, deepest: usize) {
        self.x += offset;
        self.y = settings.margin + settings.level_spacing * match settings.direction {
            Direction::TopDown => self.depth as f64,
            Direction::BottomUp => (deepest - self.depth) as f64,
        };

        let offset = offset + self.shift;
        self.shift = 0.0;

        for child in self.children.iter_mut() {
            child.apply_shifts(offset, settings, deepest);
        }
    }
}

impl<'a, T> LayoutNode<'a, T> {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Iterates over this node and all of its descendants, parents before children and left
    /// before right.
    pub fn iter(&self) -> LayoutIter<'_, 'a, T> {
        LayoutIter { stack: vec![self] }
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    pub fn bounds(&self) -> Bounds {
        let start = self.position();
        self.iter().fold(Bounds { min: start, max: start }, |bounds, node| Bounds {
            min: Point::new(bounds.min.x.min(node.x), bounds.min.y.min(node.y)),
            max: Point::new(bounds.max.x.max(node.x), bounds.max.y.max(node.y)),
        })
    }

    /// Follows a path of child indices from this node.
    pub fn get(&self, path: &NodePath) -> Option<&LayoutNode<'a, T>> {
        let mut node = self;
        for &index in path.indices() {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    /// Finds the first node, in the order of [iter](#method.iter), positioned within `radius` of
    /// `point`, and returns the path to it. Use this to work out which node was clicked on.
    pub fn hit_test(&self, point: Point, radius: f64) -> Option<NodePath> {
        let mut path = NodePath::root();
        if self.find_within(&point, radius, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn find_within(&self, point: &Point, radius: f64, path: &mut NodePath) -> bool {
        if self.position().distance(point) <= radius {
            return true;
        }

        for (i, child) in self.children.iter().enumerate() {
            path.push(i);
            if child.find_within(point, radius, path) {
                return true;
            }
            path.pop();
        }

        false
    }
}

/// Pre-order iterator over a layout. Created by [LayoutNode::iter].
pub struct LayoutIter<'l, 'a, T> {
    stack: Vec<&'l LayoutNode<'a, T>>,
}

impl<'l, 'a, T> Iterator for LayoutIter<'l, 'a, T> {
    type Item = &'l LayoutNode<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
