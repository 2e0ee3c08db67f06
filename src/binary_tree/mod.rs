//! Trees which allow at most two children for their nodes.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! A [`BinaryTree`] is nothing more than an optional owning link to a root [`Node`]; an empty tree has no root. There is no insertion API: the shape is built by constructing nodes and wiring their links, either by direct assignment or through the builder methods on `Node`, and then assigning the root. Every method here is a read of whatever structure is reachable from the root.
//!
//! # Example
//! ```rust
//! use sapling::{BinaryTree, Node, Order};
//!
//! // The example tree, with seven nodes over three levels:
//! //         1
//! //      2     3
//! //     4 5   6 7
//! let tree = BinaryTree::with_root(
//!     Node::new(1)
//!         .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
//!         .with_right(Node::new(3).with_left(Node::new(6)).with_right(Node::new(7))),
//! );
//!
//! assert_eq!(tree.pre_order(), [&1, &2, &4, &5, &3, &6, &7]);
//! assert_eq!(tree.in_order(), [&4, &2, &5, &1, &6, &3, &7]);
//! assert_eq!(tree.post_order(), [&4, &5, &2, &6, &7, &3, &1]);
//! assert_eq!(tree.bfs(), [&1, &2, &3, &4, &5, &6, &7]);
//!
//! // Depth-first traversals can start from any node, covering only its subtree:
//! let left = tree.root().and_then(Node::left);
//! assert_eq!(tree.pre_order_from(left), [&2, &4, &5]);
//!
//! // Levels are what breadth-first order looks like before being flattened:
//! assert_eq!(tree.levels(), [vec![&1], vec![&2, &3], vec![&4, &5, &6, &7]]);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.len(), 7);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "
//! [`BinaryTree`]: struct.BinaryTree.html " "
//! [`Node`]: ../node/struct.Node.html " "

use core::iter;
use alloc::{boxed::Box, vec::Vec};
use crate::{
    node::Node,
    traversal::{self, Collect, LevelOrder, Order, Visitor},
};


/// A binary tree, owning its root node and, through it, every other node.
///
/// The root is a public field: assign it to give the tree its shape, take it to dismantle the tree. Dropping the tree drops every node reachable from the root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryTree<T> {
    /// The top node of the tree, or `None` if the tree is empty.
    pub root: Option<Box<Node<T>>>,
}
impl<T> BinaryTree<T> {
    /// Creates an empty tree, i.e. one without a root node.
    #[inline(always)]
    pub const fn new() -> Self {
        Self { root: None }
    }
    /// Creates a tree with the specified root node.
    #[inline]
    pub fn with_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
    /// Returns a reference to the root node, or `None` if the tree is empty.
    #[inline(always)]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
    /// Returns a *mutable* reference to the root node, or `None` if the tree is empty.
    #[inline(always)]
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }
    /// Returns `true` if the tree has no root node, `false` otherwise.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the number of nodes reachable from the root.
    ///
    /// The nodes are counted by walking the whole tree, so this takes time proportional to the result.
    #[inline]
    pub fn len(&self) -> usize {
        self.level_order().count()
    }
    /// Returns the number of levels in the tree: `0` for an empty tree, `1` for a lone root, and so on.
    #[inline]
    pub fn height(&self) -> usize {
        self.level_nodes().count()
    }

    /// Traverses the tree from the root node in the specified order, feeding every value to the visitor and returning its final value.
    #[inline]
    pub fn traverse<'a, V>(&'a self, order: Order, visitor: V) -> V::Output
    where
        V: Visitor<'a, T>,
    {
        traversal::walk(order, self.root(), visitor)
    }
    /// Traverses the subtree reachable from the specified starting node in the specified order, feeding every value to the visitor and returning its final value. A starting point of `None` finishes the visitor right away.
    ///
    /// The starting node is not required to belong to the tree.
    #[inline]
    #[allow(clippy::unused_self)] // the starting node replaces the root
    pub fn traverse_from<'a, V>(
        &self,
        order: Order,
        start: Option<&'a Node<T>>,
        visitor: V,
    ) -> V::Output
    where
        V: Visitor<'a, T>,
    {
        traversal::walk(order, start, visitor)
    }

    /// Returns the values of the nodes in *pre-order*: every node comes before its left subtree, which comes before its right subtree.
    #[inline]
    pub fn pre_order(&self) -> Vec<&T> {
        self.traverse(Order::PreOrder, Collect::new())
    }
    /// Returns the values of the nodes reachable from `start` in *pre-order*, excluding its ancestors and siblings.
    #[inline]
    pub fn pre_order_from<'a>(&self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        self.traverse_from(Order::PreOrder, start, Collect::new())
    }
    /// Returns the values of the nodes in *in-order*: every node comes after its left subtree and before its right subtree.
    ///
    /// The result is only sorted if the values happen to follow binary search tree ordering, which nothing in this crate maintains.
    #[inline]
    pub fn in_order(&self) -> Vec<&T> {
        self.traverse(Order::InOrder, Collect::new())
    }
    /// Returns the values of the nodes reachable from `start` in *in-order*, excluding its ancestors and siblings.
    #[inline]
    pub fn in_order_from<'a>(&self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        self.traverse_from(Order::InOrder, start, Collect::new())
    }
    /// Returns the values of the nodes in *post-order*: every node comes after both of its subtrees.
    #[inline]
    pub fn post_order(&self) -> Vec<&T> {
        self.traverse(Order::PostOrder, Collect::new())
    }
    /// Returns the values of the nodes reachable from `start` in *post-order*, excluding its ancestors and siblings.
    #[inline]
    pub fn post_order_from<'a>(&self, start: Option<&'a Node<T>>) -> Vec<&'a T> {
        self.traverse_from(Order::PostOrder, start, Collect::new())
    }
    /// Returns the values of the nodes in *breadth-first* order, starting from the root: level by level, left to right within a level.
    #[inline]
    pub fn bfs(&self) -> Vec<&T> {
        self.traverse(Order::BreadthFirst, Collect::new())
    }
    /// Returns an iterator over the values of the nodes in breadth-first order. This is what [`bfs`] collects.
    ///
    /// [`bfs`]: #method.bfs " "
    #[inline(always)]
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }
    /// Returns the values of the nodes grouped by level, the root's level first and every level ordered left to right.
    ///
    /// Flattening the result gives the same sequence as [`bfs`]. Useful for per-level aggregation, such as summing every level.
    ///
    /// [`bfs`]: #method.bfs " "
    pub fn levels(&self) -> Vec<Vec<&T>> {
        self.level_nodes()
            .map(|level| level.into_iter().map(|node| &node.value).collect())
            .collect()
    }

    fn level_nodes(&self) -> impl Iterator<Item = Vec<&Node<T>>> + '_ {
        let first = self.root().map(|root| alloc::vec![root]);
        iter::successors(first, |level| {
            let next = level
                .iter()
                .flat_map(|node| node.children())
                .collect::<Vec<_>>();
            if next.is_empty() {
                None
            } else {
                Some(next)
            }
        })
    }
}
impl<T> Default for BinaryTree<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T> From<Node<T>> for BinaryTree<T> {
    #[inline(always)]
    fn from(root: Node<T>) -> Self {
        Self::with_root(root)
    }
}
