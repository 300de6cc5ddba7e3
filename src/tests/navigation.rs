use alloc::{string::ToString, vec};

use crate::{parse, NodePath};

#[test]
fn test_node_path() {
    let mut path = NodePath::root();
    assert!(path.is_root());
    assert_eq!(path.to_string(), "/");

    path.push(0);
    path.push(1);
    assert_eq!(path.depth(), 2);
    assert_eq!(path[1], 1);
    assert_eq!(path.to_string(), "/0/1");
    assert_eq!(path.child(1), NodePath::new(vec![0, 1, 1]));

    assert!(NodePath::new(vec![0]).contains(&path));
    assert!(path.contains(&path));
    assert!(!path.contains(&NodePath::new(vec![0])));
    assert!(NodePath::root().contains(&path));

    assert_eq!(path.pop(), Some(1));
    assert_eq!(path.pop(), Some(0));
    assert_eq!(path.pop(), None);
}

#[test]
fn test_subtree() {
    let tree = parse("(2 + 3) * 4").unwrap();

    assert_eq!(tree.subtree(&NodePath::root()), Some(&tree));
    assert_eq!(tree.subtree(&NodePath::new(vec![0])), Some(&op!(+, num!(2), num!(3))));
    assert_eq!(tree.subtree(&NodePath::new(vec![0, 1])), Some(&num!(3)));
    assert_eq!(tree.subtree(&NodePath::new(vec![1])), Some(&num!(4)));
    assert_eq!(tree.subtree(&NodePath::new(vec![1, 0])), None);
    assert_eq!(tree.subtree(&NodePath::new(vec![3])), None);
}

#[test]
fn test_subtree_mut() {
    let mut tree = parse("(2 + 3) * 4").unwrap();

    if let Some(node) = tree.subtree_mut(&NodePath::new(vec![0, 0])) {
        *node = num!(10);
    }
    assert_eq!(tree, op!(*, op!(+, num!(10), num!(3)), num!(4)));
    assert!(tree.subtree_mut(&NodePath::new(vec![1, 1])).is_none());
}
