//! Ascending traversal over a [`Tree`][crate::Tree].
//!
//! A [`Cursor`] is a position in the tree: either a node or the end. Stepping it forward follows
//! the in-order successor, climbing through parent pointers when there is no right subtree, so a
//! traversal needs no stack. A full pass visits every edge at most twice.
//!
//! Both types borrow the tree, so the tree can't be changed while one of them is alive.
//!
//! # Examples
//!
//! ```
//! use uniq_bst::{Natural, Tree};
//!
//! let mut tree = Tree::new(Natural, Natural);
//! for x in [2, 1, 3] {
//!     tree.add(x).unwrap();
//! }
//!
//! let mut cursor = tree.begin();
//! assert_eq!(cursor.get(), Some(&1));
//!
//! cursor.move_next();
//! cursor.move_next();
//! assert_eq!(cursor.get(), Some(&3));
//!
//! cursor.move_next();
//! assert!(cursor == tree.end());
//! assert_eq!(cursor.get(), None);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::tree::Node;

/// A read-only position in a tree. Two cursors are equal when they are at the same node (or
/// both at the end), regardless of the values stored there.
pub struct Cursor<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> fmt::Debug for Cursor<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(node: Option<&'a Node<T>>) -> Self {
        Self { node }
    }

    pub(crate) fn node(&self) -> Option<&'a Node<T>> {
        self.node
    }

    /// The value at this position, or `None` at the end.
    pub fn get(&self) -> Option<&'a T> {
        self.node.map(Node::value)
    }

    /// Whether this is the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Moves to the next larger value. Moving past the largest value reaches the end, and the
    /// end stays where it is.
    pub fn move_next(&mut self) {
        self.node = self.node.and_then(Node::successor);
    }
}

/// An iterator over the values of a tree in ascending order. Created by
/// [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> fmt::Debug for Iter<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iter<'a, T> {
    /// `remaining` must be the number of values from `cursor` to the end.
    pub(crate) fn new(cursor: Cursor<'a, T>, remaining: usize) -> Self {
        Self { cursor, remaining }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cursor.get()?;
        self.cursor.move_next();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
