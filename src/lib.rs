//! An owned binary tree and the four canonical ways of walking it.
//!
//! ------------------------
//!
//! # Overview
//! Sapling implements the plainest possible binary tree: every [`Node`] holds a value and exclusively owns up to two child nodes through `Option<Box<Node<T>>>` links, and a [`BinaryTree`] owns the root node. There is no balancing and no ordering by key, and nothing stops you from wiring nodes by hand; the fields are public on purpose, so that the shape of a tree can be built exactly the way it's drawn on a whiteboard.
//!
//! Once built, a tree can be read in four orders:
//! - **Pre-order** — the node, then its left subtree, then its right subtree. Reproduces construction order, which makes it the order of choice for cloning a structure.
//! - **In-order** — the left subtree, then the node, then the right subtree. Yields ascending values only if the caller keeps binary search tree ordering on their own.
//! - **Post-order** — both subtrees, then the node. Children always come before their parent, which is what destruction needs.
//! - **Breadth-first** — level by level, left to right within a level, driven by a first-in-first-out queue.
//!
//! The depth-first orders are recursive and use auxiliary space proportional to the height of the tree; breadth-first traversal is iterative and uses space proportional to its width. All four are pure reads.
//!
//! # Example
//! ```rust
//! use sapling::{BinaryTree, Node};
//!
//! let mut tree = BinaryTree::new();
//! let root = tree.root.insert(Box::new(Node::new(1)));
//! root.attach_left(Node::new(2)).attach_left(Node::new(4));
//! root.attach_right(Node::new(3));
//!
//! assert_eq!(tree.pre_order(), [&1, &2, &4, &3]);
//! assert_eq!(tree.in_order(), [&4, &2, &1, &3]);
//! assert_eq!(tree.post_order(), [&4, &2, &3, &1]);
//! assert_eq!(tree.bfs(), [&1, &2, &3, &4]);
//! ```
//!
//! # Preconditions
//! The links are plain owning boxes, so the borrow checker already rules out shared subtrees and cycles in safe code. No traversal performs cycle detection of any kind.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for some types. *An allocator is required either way.*
//! - `log` (**enabled by default**) — emits a `trace`-level record through the [`log`] facade whenever a traversal starts.
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`log`]: https://docs.rs/log " "
//! [`Node`]: node/struct.Node.html " "
//! [`BinaryTree`]: binary_tree/struct.BinaryTree.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used,
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

#[macro_use]
mod macros;

pub mod node;
pub use node::Node;

pub mod binary_tree;
pub use binary_tree::BinaryTree;

pub mod traversal;
pub use traversal::{Order, Visitor, VisitorDirection, Collect, LevelOrder, ParseOrderError};

/// A prelude for using Sapling, containing the most used types for glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        binary_tree::BinaryTree,
        node::Node,
        traversal::{
            Order as TraversalOrder,
            Visitor as TreeVisitor,
            VisitorDirection as TreeVisitorDirection,
        },
    };
}
