macro_rules! num {
    ($n:expr) => { crate::ExpressionNode::Number($n as f64) };
}

macro_rules! op {
    (^, $l:expr, $r:expr $(,)?) => { crate::ExpressionNode::operation(crate::Operator::Power, $l, $r) };
    (*, $l:expr, $r:expr $(,)?) => { crate::ExpressionNode::operation(crate::Operator::Multiply, $l, $r) };
    (/, $l:expr, $r:expr $(,)?) => { crate::ExpressionNode::operation(crate::Operator::Divide, $l, $r) };
    (+, $l:expr, $r:expr $(,)?) => { crate::ExpressionNode::operation(crate::Operator::Add, $l, $r) };
    (-, $l:expr, $r:expr $(,)?) => { crate::ExpressionNode::operation(crate::Operator::Subtract, $l, $r) };
}

macro_rules! eval {
    ($t:expr) => { crate::parse($t).unwrap().evaluate() };
}

macro_rules! render {
    ($n:expr) => { {
        let tree = $n;
        let layout = crate::layout(&tree, &crate::LayoutSettings::default());
        let mut renderer = crate::renderers::AsciiRenderer::default();
        <crate::renderers::AsciiRenderer as crate::render::Renderer>::draw_all(&mut renderer, &layout);
        renderer.lines
    } };
}

/// A tree with any number of children per node, for exercising layout on shapes which expression
/// trees can't have.
#[derive(PartialEq, Debug, Clone)]
pub struct Shape(pub alloc::vec::Vec<Shape>);

impl crate::Layoutable for Shape {
    fn layout_children(&self) -> alloc::vec::Vec<&Self> {
        self.0.iter().collect()
    }
}

/// Every full binary tree with exactly `internal` internal nodes.
pub fn binary_shapes(internal: usize) -> alloc::vec::Vec<Shape> {
    if internal == 0 {
        return alloc::vec![Shape(alloc::vec![])];
    }

    let mut shapes = alloc::vec![];
    for left in 0..internal {
        for l in binary_shapes(left) {
            for r in binary_shapes(internal - 1 - left) {
                shapes.push(Shape(alloc::vec![l.clone(), r]));
            }
        }
    }
    shapes
}

/// Asserts that no two nodes at the same depth are closer than `spacing`.
pub fn assert_no_overlap<T>(layout: &crate::LayoutNode<T>, spacing: f64) {
    let mut by_depth: alloc::vec::Vec<alloc::vec::Vec<f64>> = alloc::vec![];
    for node in layout.iter() {
        if by_depth.len() <= node.depth {
            by_depth.resize(node.depth + 1, alloc::vec![]);
        }
        by_depth[node.depth].push(node.x);
    }

    for (depth, xs) in by_depth.iter().enumerate() {
        for (i, a) in xs.iter().enumerate() {
            for b in &xs[i + 1..] {
                assert!(
                    num_traits::Float::abs(a - b) >= spacing - 1e-9,
                    "nodes at depth {} are too close: {} and {}", depth, a, b,
                );
            }
        }
    }
}
