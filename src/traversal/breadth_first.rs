use core::iter::FusedIterator;
use alloc::collections::VecDeque;
use crate::node::Node;

/// An iterator over the values of a subtree in breadth-first order: level by level, nearest to the starting node first, left to right within a level.
///
/// Driven by a first-in-first-out queue seeded with the starting node. Each step dequeues a node, yields its value and enqueues its left and then right child, for those which are present.
///
/// # Example
/// ```rust
/// use sapling::{LevelOrder, Node};
///
/// let root = Node::new('a')
///     .with_left(Node::new('b').with_left(Node::new('d')))
///     .with_right(Node::new('c'));
/// let values: String = LevelOrder::new(Some(&root)).collect();
/// assert_eq!(values, "abcd");
/// ```
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}
impl<'a, T> LevelOrder<'a, T> {
    /// Creates an iterator starting from the specified node, or an empty one if `None` is passed.
    #[inline]
    pub fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            queue: start.into_iter().collect(),
        }
    }
    /// Returns the number of nodes which have been discovered but not yet yielded.
    #[inline(always)]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        self.queue.extend(current.children());
        Some(&current.value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every queued node is yet to be yielded, but so might be any number of its descendants
        (self.queue.len(), None)
    }
}
impl<'a, T> FusedIterator for LevelOrder<'a, T> {}
impl<'a, T> Clone for LevelOrder<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
        }
    }
}
