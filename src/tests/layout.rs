use alloc::{string::ToString, vec, vec::Vec};

use crate::{layout, parse, collapse, Evaluable, LayoutSettings, NodePath, layout::{Direction, Point}};
use super::util::{Shape, assert_no_overlap, binary_shapes};

const EXPRESSIONS: &[&str] = &[
    "1",
    "1 + 2",
    "1 + 2 * 3",
    "(2 + 3) * 4",
    "1 + 2 + 3 + 4 + 5 + 6",
    "1 - (2 - (3 - (4 - (5 - 6))))",
    "(1 + 2) * (3 + 4) / ((5 - 6) ^ (7 * 8))",
    "1 * (2 + 3 * (4 - 5 / (6 ^ 7))) - 8",
    "((1 + 2) * 3 + 4) * 5 + (6 - (7 + 8 * 9))",
];

#[test]
fn test_layout_positions() {
    let tree = parse("1 + 2 * 3").unwrap();
    let layout = layout(&tree, &LayoutSettings::default());

    // The multiplication would sit on top of the 1, so it is pushed right along with its operands
    let positions = layout.iter().map(|n| (n.node.label(), n.x, n.y)).collect::<Vec<_>>();
    assert_eq!(
        positions,
        vec![
            ("+".to_string(), 50.0, 25.0),
            ("1".to_string(), 25.0, 75.0),
            ("*".to_string(), 75.0, 75.0),
            ("2".to_string(), 50.0, 125.0),
            ("3".to_string(), 100.0, 125.0),
        ]
    );
}

#[test]
fn test_layout_settings() {
    let tree = parse("1 + 2").unwrap();
    let settings = LayoutSettings {
        node_spacing: 30.0,
        level_spacing: 40.0,
        margin: 0.0,
        direction: Direction::TopDown,
    };
    let layout = layout(&tree, &settings);
    assert_eq!(layout.position(), Point::new(15.0, 0.0));
    assert_eq!(layout.children[0].position(), Point::new(0.0, 40.0));
    assert_eq!(layout.children[1].position(), Point::new(30.0, 40.0));

    // Bottom-up puts the root on the highest level
    let layout = crate::layout(&tree, &LayoutSettings { direction: Direction::BottomUp, ..settings });
    assert_eq!(layout.position(), Point::new(15.0, 40.0));
    assert_eq!(layout.children[0].position(), Point::new(0.0, 0.0));
}

#[test]
fn test_layout_is_deterministic() {
    for expression in EXPRESSIONS {
        let tree = parse(expression).unwrap();
        let settings = LayoutSettings::default();
        assert_eq!(layout(&tree, &settings), layout(&tree, &settings));

        // Only the shape matters, not the values
        let mut other = tree.clone();
        relabel(&mut other);
        let a = layout(&tree, &settings).iter().map(|n| n.position()).collect::<Vec<_>>();
        let b = layout(&other, &settings).iter().map(|n| n.position()).collect::<Vec<_>>();
        assert_eq!(a, b);
    }
}

fn relabel(node: &mut crate::ExpressionNode) {
    match node {
        crate::ExpressionNode::Number(n) => *n += 100.0,
        crate::ExpressionNode::Operation(op, left, right) => {
            *op = crate::Operator::Subtract;
            relabel(left);
            relabel(right);
        }
    }
}

#[test]
fn test_layout_no_overlap() {
    let settings = LayoutSettings::default();

    for expression in EXPRESSIONS {
        let tree = parse(expression).unwrap();
        let layout = layout(&tree, &settings);
        assert_eq!(layout.node_count(), tree.size());
        assert_no_overlap(&layout, settings.node_spacing);
    }

    for internal in 0..=6 {
        for shape in binary_shapes(internal) {
            assert_no_overlap(&layout(&shape, &settings), settings.node_spacing);
        }
    }
}

#[test]
fn test_layout_parents_over_children() {
    let settings = LayoutSettings::default();

    for internal in 0..=5 {
        for shape in binary_shapes(internal) {
            let layout = layout(&shape, &settings);
            for node in layout.iter() {
                assert_eq!(node.shift, 0.0);
                if let [left, right] = node.children.as_slice() {
                    assert_eq!(node.x, (left.x + right.x) / 2.0);
                    assert!(left.x < right.x);
                    assert_eq!(left.y, right.y);
                    assert!(node.y < left.y);
                }
            }
        }
    }
}

#[test]
fn test_layout_general_shapes() {
    let settings = LayoutSettings::default();
    let leaf = || Shape(vec![]);

    // One child sits directly below its parent
    let chain = Shape(vec![Shape(vec![leaf()])]);
    let layout = layout(&chain, &settings);
    assert_eq!(layout.x, layout.children[0].x);
    assert_eq!(layout.x, layout.children[0].children[0].x);

    // Wider nodes centre over their first and last children
    let wide = Shape(vec![leaf(), Shape(vec![leaf(), leaf(), leaf()]), leaf(), Shape(vec![leaf()])]);
    let layout = crate::layout(&wide, &settings);
    assert_eq!(layout.x, (layout.children[0].x + layout.children[3].x) / 2.0);
    let middle = &layout.children[1];
    assert_eq!(middle.x, middle.children[1].x);
    assert_no_overlap(&layout, settings.node_spacing);
    assert_eq!(layout.node_count(), 9);
}

#[test]
fn test_layout_after_collapse() {
    let settings = LayoutSettings::default();
    let mut tree = parse("(1 + 2) * (3 + 4) / ((5 - 6) ^ (7 * 8))").unwrap();

    let before = layout(&tree, &settings).node_count();
    let path = NodePath::new(vec![1]);
    assert_eq!(tree.collapse_at(&path), Some(Ok(1.0)));

    let layout_after = layout(&tree, &settings);
    assert!(layout_after.node_count() < before);
    assert_eq!(layout_after.node_count(), tree.size());
    assert_no_overlap(&layout_after, settings.node_spacing);

    collapse(&mut tree).unwrap();
    let layout_after = layout(&tree, &settings);
    assert_eq!(layout_after.node_count(), 1);
    assert_eq!(layout_after.position(), Point::new(settings.margin, settings.margin));
}

#[test]
fn test_layout_hit_test() {
    let tree = parse("(2 + 3) * 4").unwrap();
    let layout = layout(&tree, &LayoutSettings::default());

    assert_eq!(layout.hit_test(Point::new(75.0, 25.0), 20.0), Some(NodePath::root()));
    assert_eq!(layout.hit_test(Point::new(55.0, 80.0), 20.0), Some(NodePath::new(vec![0])));
    assert_eq!(layout.hit_test(Point::new(75.0, 125.0), 20.0), Some(NodePath::new(vec![0, 1])));
    assert_eq!(layout.hit_test(Point::new(100.0, 125.0), 20.0), None);
    assert_eq!(layout.hit_test(Point::new(500.0, 500.0), 20.0), None);

    let path = layout.hit_test(Point::new(100.0, 70.0), 20.0).unwrap();
    assert_eq!(layout.get(&path).map(|n| n.position()), Some(Point::new(100.0, 75.0)));
    assert_eq!(tree.subtree(&path), Some(&num!(4)));
}

#[test]
fn test_layout_bounds() {
    let tree = parse("(2 + 3) * 4").unwrap();
    let bounds = layout(&tree, &LayoutSettings::default()).bounds();

    assert_eq!(bounds.min, Point::new(25.0, 25.0));
    assert_eq!(bounds.max, Point::new(100.0, 125.0));
    assert_eq!(bounds.width(), 75.0);
    assert_eq!(bounds.height(), 100.0);
}
