//! Recursive depth-first walkers.
//!
//! Each walker returns `Some` with the visitor's output as soon as the visitor stops, and `None` once the subtree has been exhausted. An absent node is the base case and visits nothing.

use crate::node::Node;
use super::{Visitor, VisitorDirection};

/// Bails out of the enclosing walker with the visitor's output if it asked to stop.
macro_rules! visit {
    ($visitor:expr, $value:expr) => {
        if let VisitorDirection::Stop(output) = $visitor.visit($value) {
            return Some(output);
        }
    };
}
/// Bails out of the enclosing walker if the recursive walk was stopped.
macro_rules! descend {
    ($walk:expr) => {
        if let Some(output) = $walk {
            return Some(output);
        }
    };
}

pub(crate) fn pre_order<'a, T, V>(node: Option<&'a Node<T>>, visitor: &mut V) -> Option<V::Output>
where
    T: 'a,
    V: Visitor<'a, T>,
{
    let node = node?;
    visit!(visitor, &node.value);
    descend!(pre_order(node.left(), visitor));
    pre_order(node.right(), visitor)
}

pub(crate) fn in_order<'a, T, V>(node: Option<&'a Node<T>>, visitor: &mut V) -> Option<V::Output>
where
    T: 'a,
    V: Visitor<'a, T>,
{
    let node = node?;
    descend!(in_order(node.left(), visitor));
    visit!(visitor, &node.value);
    in_order(node.right(), visitor)
}

pub(crate) fn post_order<'a, T, V>(node: Option<&'a Node<T>>, visitor: &mut V) -> Option<V::Output>
where
    T: 'a,
    V: Visitor<'a, T>,
{
    let node = node?;
    descend!(post_order(node.left(), visitor));
    descend!(post_order(node.right(), visitor));
    match visitor.visit(&node.value) {
        VisitorDirection::Continue => None,
        VisitorDirection::Stop(output) => Some(output),
    }
}
