//! A Binary Search Tree (BST) container that stores every element at most once, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. It is made of `Node`s, each storing a value and possibly a left and a right child
//! `Node`. The invariants this crate keeps are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold a value that comes before its
//!    own value.
//! 2. For every `Node`, all the `Node`s in its right subtree hold a value that comes after its
//!    own value.
//! 3. No two `Node`s hold equivalent values.
//!
//! What "comes before" and "equivalent" mean is up to the caller: a [`Tree`] is built from two
//! policies (see [`policy`]) and never assumes an ordering of its own.
//!
//! Searching takes `O(height)`. This tree does not rebalance, so inserting values in sorted order
//! makes the height equal to the number of values. Every operation is written as a loop rather
//! than recursion so such degenerate trees can't overflow the stack.
//!
//! Each `Node` also points back at its parent. This lets a [`Cursor`] step to the next value in
//! ascending order without keeping a stack: from a node with no right child, climb until we
//! arrive at a parent from its left side.
//!
//! Copies ([`Clone`], [`Tree::try_clone`] and [`Tree::subtree`]) always allocate fresh nodes and
//! rebuild the parent pointers, so two trees never share a node.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
pub mod policy;
mod print;
pub mod tree;

pub use error::Error;
pub use iter::{Cursor, Iter};
pub use policy::{Equivalence, Natural, Precedence};
pub use print::{print_if, write_if};
pub use tree::Tree;
