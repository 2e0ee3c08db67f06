//! The building block of a binary tree.

use alloc::{boxed::Box, vec::Vec};
use arrayvec::ArrayVec;

/// A node of a binary tree.
///
/// Every node exclusively owns its left and right subtrees. The links are public and meant to be assigned directly: nothing is validated, so whatever shape the caller wires up is the shape the traversals see.
///
/// # Example
/// ```rust
/// use sapling::Node;
///
/// let mut root = Node::new("root");
/// root.left = Some(Box::new(Node::new("left")));
/// let root = root.with_right(Node::new("right"));
///
/// assert_eq!(root.left().map(|x| x.value), Some("left"));
/// assert_eq!(root.right().map(|x| x.value), Some("right"));
/// assert!(!root.is_leaf());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    /// The data payload of the node.
    pub value: T,
    /// The left subtree, or `None` if there isn't one.
    pub left: Option<Box<Node<T>>>,
    /// The right subtree, or `None` if there isn't one.
    pub right: Option<Box<Node<T>>>,
}
impl<T> Node<T> {
    /// Creates a node with the specified value and no children.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
    /// Sets the left child, dropping the previous left subtree if there was one, and returns the node back. Intended for building trees in a single expression.
    #[inline]
    pub fn with_left(mut self, child: Node<T>) -> Self {
        self.left = Some(Box::new(child));
        self
    }
    /// Sets the right child, dropping the previous right subtree if there was one, and returns the node back. Intended for building trees in a single expression.
    #[inline]
    pub fn with_right(mut self, child: Node<T>) -> Self {
        self.right = Some(Box::new(child));
        self
    }
    /// Attaches the specified node as the left child and returns a mutable reference to it, so that its own children can be attached next. The previous left subtree, if any, is dropped.
    #[inline]
    pub fn attach_left(&mut self, child: Node<T>) -> &mut Node<T> {
        self.left.insert(Box::new(child))
    }
    /// Attaches the specified node as the right child and returns a mutable reference to it, so that its own children can be attached next. The previous right subtree, if any, is dropped.
    #[inline]
    pub fn attach_right(&mut self, child: Node<T>) -> &mut Node<T> {
        self.right.insert(Box::new(child))
    }
    /// Returns a reference to the left child, or `None` if there isn't one.
    #[inline(always)]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }
    /// Returns a reference to the right child, or `None` if there isn't one.
    #[inline(always)]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    /// Returns references to the children which are present, the left one first.
    #[inline]
    pub fn children(&self) -> ArrayVec<[&Node<T>; 2]> {
        let mut children = ArrayVec::new();
        if let Some(left) = self.left() {
            children.push(left);
        }
        if let Some(right) = self.right() {
            children.push(right);
        }
        children
    }
}
impl<T> From<T> for Node<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
impl<T> Drop for Node<T> {
    /// Detaches the subtrees and frees them one node at a time, so that dropping a degenerate tree does not recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            // `node` is a leaf by now, so its own drop glue has nothing left to recurse into
        }
    }
}
