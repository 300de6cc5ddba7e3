use alloc::{string::String, vec::Vec};

use crate::layout::{Bounds, LayoutNode, Point};
use crate::node::expression::ExpressionNode;

/// A node which knows what text to draw for itself.
pub trait Labelled {
    fn label(&self) -> String;
}

impl Labelled for ExpressionNode {
    fn label(&self) -> String {
        ExpressionNode::label(self)
    }
}

pub trait Renderer {
    /// Called with every label about to be drawn, and where, before [init](#tymethod.init).
    /// Renderers whose text can be wider than the gap between nodes use this to pick a scale.
    fn measure(&mut self, _labels: &[(String, Point)]) {}

    /// Prepare a draw surface large enough for the given node positions.
    fn init(&mut self, bounds: Bounds);

    /// Draw the edge between a parent at `from` and a child at `to`.
    fn draw_branch(&mut self, from: Point, to: Point);

    /// Draw a node, centred at a specific point.
    fn draw_node(&mut self, label: &str, point: Point);

    /// Initialises the graphics surface and draws a laid-out tree onto it. Every branch is drawn
    /// before any node, so nodes are never covered by a line.
    fn draw_all<T: Labelled>(&mut self, layout: &LayoutNode<T>) where Self: Sized {
        let labels = layout.iter()
            .map(|node| (node.node.label(), node.position()))
            .collect::<Vec<_>>();

        self.measure(&labels);
        self.init(layout.bounds());

        for node in layout.iter() {
            for child in &node.children {
                self.draw_branch(node.position(), child.position());
            }
        }

        for (label, point) in &labels {
            self.draw_node(label, *point);
        }
    }
}
