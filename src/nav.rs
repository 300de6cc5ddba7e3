use alloc::vec::Vec;
use core::fmt;

/// Describes the movements which must be taken down a tree to reach one of its nodes.
///
/// Each entry is the index of the child to descend into, so for a binary tree `0` is the left
/// child and `1` is the right child. The empty path is the root itself.
#[derive(PartialEq, Eq, Debug, Clone, Default, Hash)]
pub struct NodePath {
    path: Vec<usize>,
}

impl NodePath {
    pub fn new(path: Vec<usize>) -> Self { Self { path } }

    /// The path to the root of a tree.
    pub fn root() -> Self { Self::default() }

    /// Returns true if this path doesn't go anywhere.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// The depth of the node this path leads to.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.path
    }

    /// Adds index to this path.
    pub fn push(&mut self, index: usize) {
        self.path.push(index);
    }

    /// Removes the final index from this path, moving it up to the parent node.
    pub fn pop(&mut self) -> Option<usize> {
        self.path.pop()
    }

    /// Returns a copy of this path extended by one more step.
    pub fn child(&self, index: usize) -> NodePath {
        let mut path = self.clone();
        path.push(index);
        path
    }

    /// Returns true if `other` leads to this node or one of its descendants.
    pub fn contains(&self, other: &NodePath) -> bool {
        other.path.starts_with(&self.path)
    }
}

impl core::ops::Index<usize> for NodePath {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.path[index]
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(path: Vec<usize>) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/")?;
        for (i, index) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}
