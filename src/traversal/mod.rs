//! Everything related to traversing binary trees.
//!
//! The module is home to the following items:
//! - [`Order`] — the four canonical traversal orders, parseable from their conventional names
//! - [`Visitor`] — a *trait for types which consume the values of a traversal*, optionally stopping it early with a final value
//! - [`Collect`] — the visitor used by the `pre_order`/`in_order`/`post_order`/`bfs` family of methods on [`BinaryTree`]
//! - [`LevelOrder`] — an iterator performing breadth-first traversal with a first-in-first-out queue
//! - Helper types: [`VisitorDirection`] and [`ParseOrderError`]
//!
//! [`Order`]: enum.Order.html " "
//! [`Visitor`]: trait.Visitor.html " "
//! [`Collect`]: struct.Collect.html " "
//! [`LevelOrder`]: struct.LevelOrder.html " "
//! [`VisitorDirection`]: enum.VisitorDirection.html " "
//! [`ParseOrderError`]: struct.ParseOrderError.html " "
//! [`BinaryTree`]: ../binary_tree/struct.BinaryTree.html " "

mod depth_first;
mod breadth_first;
pub use breadth_first::LevelOrder;

use core::{
    fmt::{self, Formatter, Display},
    str::FromStr,
};
use alloc::{string::String, vec::Vec};
use crate::node::Node;

/// The order in which a traversal visits the nodes of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
    /// Level by level starting from the root, left to right within a level.
    BreadthFirst,
}
impl Order {
    /// All traversal orders, depth-first ones first.
    pub const ALL: [Order; 4] = [
        Order::PreOrder,
        Order::InOrder,
        Order::PostOrder,
        Order::BreadthFirst,
    ];
    /// Returns `true` for the three orders which fully visit a subtree before moving on to its sibling, `false` for breadth-first order.
    #[inline]
    pub const fn is_depth_first(self) -> bool {
        !matches!(self, Order::BreadthFirst)
    }
}
impl Display for Order {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
            Self::BreadthFirst => "breadth-first",
        })
    }
}
impl FromStr for Order {
    type Err = ParseOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let matches_any = |names: &[&str]| names.iter().any(|x| x.eq_ignore_ascii_case(name));
        if matches_any(&["pre-order", "preorder", "pre"]) {
            Ok(Self::PreOrder)
        } else if matches_any(&["in-order", "inorder", "in"]) {
            Ok(Self::InOrder)
        } else if matches_any(&["post-order", "postorder", "post"]) {
            Ok(Self::PostOrder)
        } else if matches_any(&["breadth-first", "bfs", "level-order"]) {
            Ok(Self::BreadthFirst)
        } else {
            Err(ParseOrderError { input: s.into() })
        }
    }
}

/// The error type returned when parsing an [`Order`] from a string which doesn't name one.
///
/// [`Order`]: enum.Order.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseOrderError {
    input: String,
}
impl ParseOrderError {
    /// Returns the string which failed to parse.
    #[inline(always)]
    pub fn input(&self) -> &str {
        &self.input
    }
}
impl Display for ParseOrderError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&alloc::format!("unknown traversal order \"{}\"", self.input))
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for ParseOrderError {}

/// Types which consume the values produced by a traversal, one by one, and turn them into a final value.
///
/// The lifetime `'a` is the lifetime of the tree being traversed, which lets visitors keep the references they are handed.
///
/// # Example
/// ```rust
/// use sapling::{BinaryTree, Node, Order, Visitor, VisitorDirection};
///
/// /// Sums values until the total exceeds a limit.
/// struct SumUpTo(u32, u32);
/// impl<'a> Visitor<'a, u32> for SumUpTo {
///     type Output = u32;
///     fn visit(&mut self, value: &'a u32) -> VisitorDirection<u32> {
///         self.1 += value;
///         if self.1 > self.0 {
///             VisitorDirection::Stop(self.1)
///         } else {
///             VisitorDirection::Continue
///         }
///     }
///     fn finish(self) -> u32 {
///         self.1
///     }
/// }
///
/// let tree = BinaryTree::with_root(
///     Node::new(1).with_left(Node::new(2)).with_right(Node::new(3)),
/// );
/// assert_eq!(tree.traverse(Order::BreadthFirst, SumUpTo(2, 0)), 3);
/// assert_eq!(tree.traverse(Order::BreadthFirst, SumUpTo(10, 0)), 6);
/// ```
pub trait Visitor<'a, T: 'a> {
    /// The final value produced by the visitor.
    type Output;
    /// Visits one value, returning whether the traversal should go on.
    fn visit(&mut self, value: &'a T) -> VisitorDirection<Self::Output>;
    /// Produces the final value once the traversal has run out of nodes without the visitor stopping it.
    fn finish(self) -> Self::Output;
}
impl<'a, T: 'a, V: Visitor<'a, T>> Visitor<'a, T> for &mut V {
    type Output = Option<V::Output>;
    /// Forwards to the referenced visitor. Since the visitor cannot be moved out of the reference, an early stop is reported as `Some` and running out of nodes as `None`.
    #[inline(always)]
    fn visit(&mut self, value: &'a T) -> VisitorDirection<Self::Output> {
        match (**self).visit(value) {
            VisitorDirection::Continue => VisitorDirection::Continue,
            VisitorDirection::Stop(output) => VisitorDirection::Stop(Some(output)),
        }
    }
    #[inline(always)]
    fn finish(self) -> Self::Output {
        None
    }
}

/// The direction in which a visitor wishes to go after visiting a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisitorDirection<V> {
    /// Continue on to the next value in the traversal order.
    Continue,
    /// Stop the traversal, producing a final value.
    Stop(V),
}

/// A visitor which collects references to all visited values into a `Vec`, in visiting order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collect<'a, T> {
    values: Vec<&'a T>,
}
impl<'a, T> Collect<'a, T> {
    /// Creates an empty collecting visitor.
    #[inline(always)]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }
    /// Creates an empty collecting visitor with space reserved for the specified number of values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }
}
impl<'a, T> Default for Collect<'a, T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<'a, T: 'a> Visitor<'a, T> for Collect<'a, T> {
    type Output = Vec<&'a T>;
    #[inline]
    fn visit(&mut self, value: &'a T) -> VisitorDirection<Self::Output> {
        self.values.push(value);
        VisitorDirection::Continue
    }
    #[inline(always)]
    fn finish(self) -> Self::Output {
        self.values
    }
}

/// Drives the visitor over the subtree reachable from `start` in the specified order, returning its final value.
///
/// An absent starting node is an empty traversal: the visitor is finished without visiting anything.
pub(crate) fn walk<'a, T: 'a, V: Visitor<'a, T>>(
    order: Order,
    start: Option<&'a Node<T>>,
    mut visitor: V,
) -> V::Output {
    trace!("starting {} traversal", order);
    let stopped = match order {
        Order::PreOrder => depth_first::pre_order(start, &mut visitor),
        Order::InOrder => depth_first::in_order(start, &mut visitor),
        Order::PostOrder => depth_first::post_order(start, &mut visitor),
        Order::BreadthFirst => LevelOrder::new(start).find_map(|value| match visitor.visit(value) {
            VisitorDirection::Continue => None,
            VisitorDirection::Stop(output) => Some(output),
        }),
    };
    match stopped {
        Some(output) => output,
        None => visitor.finish(),
    }
}
