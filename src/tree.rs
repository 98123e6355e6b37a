//! An unbalanced Binary Search Tree of unique values whose nodes keep a pointer to their parent.
//!
//! Children are owned by their parent node, the root is owned by the [`Tree`]. The parent
//! pointer never owns anything; it only lets a [`Cursor`] walk back up the tree to find the next
//! value without keeping a stack around.
//!
//! # Examples
//!
//! ```
//! use uniq_bst::{Error, Tree};
//!
//! let mut tree = Tree::new(|a: &i32, b: &i32| a == b, |a: &i32, b: &i32| a < b);
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.root(), Err(Error::EmptyCollection));
//!
//! for x in [6, 4, 8, 2, 5, 1, 3, 7, 9] {
//!     tree.add(x).unwrap();
//! }
//!
//! // Values are unique.
//! assert_eq!(tree.add(4), Err(Error::DuplicateKey));
//! assert_eq!(tree.size(), 9);
//!
//! // A subtree is a fresh copy rooted at the located value.
//! let four = tree.subtree(&4).unwrap();
//! assert_eq!(four.root(), Ok(&4));
//! assert_eq!(four.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//!
//! // Looking for something that isn't there is not an error.
//! assert!(tree.subtree(&42).unwrap().is_empty());
//! ```

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::iter::{Cursor, Iter};
use crate::policy::{Equivalence, Precedence};
use crate::Error;

/// A Binary Search Tree holding each value at most once. Placement is decided by the `L`
/// ([`Precedence`]) policy and uniqueness by the `E` ([`Equivalence`]) policy. The tree is never
/// rebalanced so inserting sorted values produces a chain.
pub struct Tree<T, E, L> {
    // This is a `Link` instead of a `Box` so that the `Tree` can be moved around without the
    // root's children losing their parent.
    root: Link<T>,
    size: usize,
    equals: E,
    less_than: L,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T, E, L> Drop for Tree<T, E, L> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, E, L> Clone for Tree<T, E, L>
where
    T: Clone,
    E: Clone,
    L: Clone,
{
    /// Copies every node. Aborts through [`alloc::handle_alloc_error`] if a node can't be
    /// allocated; use [`Tree::try_clone`] to get an [`Error`] instead.
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|_| alloc::handle_alloc_error(Layout::new::<Node<T>>()))
    }

    fn clone_from(&mut self, source: &Self) {
        if self.try_clone_from(source).is_err() {
            alloc::handle_alloc_error(Layout::new::<Node<T>>());
        }
    }
}

impl<T, E, L> fmt::Debug for Tree<T, E, L>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Writes the values in ascending order separated by single spaces.
impl<T, E, L> fmt::Display for Tree<T, E, L>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
            for value in values {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}

impl<'a, T, E, L> IntoIterator for &'a Tree<T, E, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E, L> Tree<T, E, L> {
    /// Generates a new, empty `Tree` that uses `equals` to detect duplicates and `less_than` to
    /// order values.
    pub fn new(equals: E, less_than: L) -> Self {
        Self {
            root: Link(None),
            size: 0,
            equals,
            less_than,
            marker: PhantomData,
        }
    }

    /// How many values are stored.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Returns the value stored at the root.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniq_bst::{Error, Natural, Tree};
    ///
    /// let mut tree = Tree::new(Natural, Natural);
    /// assert_eq!(tree.root(), Err(Error::EmptyCollection));
    ///
    /// tree.add(5).unwrap();
    /// tree.add(1).unwrap();
    /// assert_eq!(tree.root(), Ok(&5));
    /// ```
    pub fn root(&self) -> Result<&T, Error> {
        self.root_node()
            .map(|root| &root.value)
            .ok_or(Error::EmptyCollection)
    }

    /// Releases every node, children before their parents, leaving the tree empty. Clearing an
    /// empty tree does nothing.
    pub fn clear(&mut self) {
        let mut current = self.root.take();
        let mut freed = 0usize;

        while let Some(mut ptr) = current.0 {
            // SAFETY: The walk starts at the detached root and only follows links it owns. Each
            // child link is taken before descending, so a node is reached exactly once more
            // (from its last child) before being freed.
            let node = unsafe { ptr.as_mut() };
            if let Some(left) = node.left.0.take() {
                current = Link(Some(left));
                continue;
            }
            if let Some(right) = node.right.0.take() {
                current = Link(Some(right));
                continue;
            }

            current = node.parent;
            // SAFETY: `node` has no children and its parent no longer links to it, so nothing
            // can reach it after this. It was allocated for exactly one `Node` by
            // `Node::allocate` so `Box` can release it.
            unsafe { drop(Box::from_raw(ptr.as_ptr())) };
            self.size -= 1;
            freed += 1;
        }

        if freed > 0 {
            log::trace!("released {} nodes", freed);
        }
        debug_assert_eq!(self.size, 0);
    }

    /// A cursor at the smallest value, or at [`end`][Tree::end] when the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.root_node().map(Node::leftmost))
    }

    /// The cursor one past the largest value. It never points at a value.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(None)
    }

    /// Iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniq_bst::{Natural, Tree};
    ///
    /// let mut tree = Tree::new(Natural, Natural);
    /// for x in [2, 3, 1] {
    ///     tree.add(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.begin(), self.size)
    }

    fn root_node(&self) -> Option<&Node<T>> {
        self.root.node()
    }
}

impl<T, E, L> Tree<T, E, L>
where
    E: Equivalence<T>,
    L: Precedence<T>,
{
    /// Inserts `value` as a new leaf.
    ///
    /// # Errors
    ///
    /// * [`Error::DuplicateKey`] if an equivalent value is already stored.
    /// * [`Error::ResourceExhausted`] if the node couldn't be allocated.
    ///
    /// The tree is unchanged in both cases.
    pub fn add(&mut self, value: T) -> Result<(), Error> {
        if self.contains(&value) {
            log::trace!("rejected duplicate value among {} values", self.size);
            return Err(Error::DuplicateKey);
        }

        let less_than = &self.less_than;
        let mut parent = Link(None);
        let mut slot = &mut self.root;
        while let Some(mut ptr) = slot.0 {
            parent = Link(Some(ptr));
            // SAFETY: `ptr` is a node of this tree and we hold `&mut self`, so no other reference
            // into the tree exists while we walk down.
            let node = unsafe { ptr.as_mut() };
            slot = if less_than.less_than(&value, &node.value) {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        slot.0 = Some(Node::allocate(value, parent)?);
        self.size += 1;
        Ok(())
    }

    /// Whether a value equivalent to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the stored value equivalent to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniq_bst::Tree;
    ///
    /// // Only the first letter matters.
    /// let mut tree = Tree::new(
    ///     |a: &&str, b: &&str| a.chars().next() == b.chars().next(),
    ///     |a: &&str, b: &&str| a.chars().next() < b.chars().next(),
    /// );
    /// tree.add("cargo").unwrap();
    ///
    /// assert_eq!(tree.get(&"crate"), Some(&"cargo"));
    /// assert_eq!(tree.get(&"rustc"), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        self.find(value).map(|node| &node.value)
    }

    /// Walks down from the root and returns the first node holding a value equivalent to `value`.
    fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root_node();
        while let Some(node) = current {
            if self.equals.equals(&node.value, value) {
                return Some(node);
            }
            current = if self.less_than.less_than(value, &node.value) {
                node.left()
            } else {
                node.right()
            };
        }
        None
    }
}

impl<T, E, L> Tree<T, E, L>
where
    T: Clone,
    E: Clone,
    L: Clone,
{
    /// Copies every node into a new tree with the same shape. Nothing is shared with `self`.
    ///
    /// # Errors
    ///
    /// [`Error::ResourceExhausted`] if any node couldn't be allocated. Nodes already copied are
    /// released before returning.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let copy = self.copy_from(self.root_node())?;
        debug_assert_eq!(copy.size, self.size);
        Ok(copy)
    }

    /// Replaces the contents of `self` with a copy of `source`. The copy is built completely
    /// before anything in `self` is touched, so on failure `self` is left as it was.
    ///
    /// # Errors
    ///
    /// [`Error::ResourceExhausted`] if any node couldn't be allocated.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), Error> {
        let mut copy = source.try_clone()?;
        mem::swap(self, &mut copy);
        Ok(())
    }

    /// Builds a new tree, with this tree's policies, holding a copy of the subtree rooted at
    /// `from`. The copy is made without recursion by walking both trees in lock step: descend into
    /// the first child not copied yet, otherwise climb back to the parent.
    fn copy_from(&self, from: Option<&Node<T>>) -> Result<Self, Error> {
        let mut copy = Self::new(self.equals.clone(), self.less_than.clone());
        let source = match from {
            Some(source) => source,
            None => return Ok(copy),
        };

        // `copy` owns every node allocated below, so returning early (or a panicking
        // `T::clone`) releases all of them when it drops.
        let mut to = Node::allocate(source.value.clone(), Link(None))?;
        copy.root = Link(Some(to));
        copy.size = 1;

        let mut from = source;
        loop {
            // SAFETY: `to` is a node of `copy`, which nothing else references yet.
            let target = unsafe { to.as_mut() };
            let next = match (from.left(), from.right()) {
                (Some(left), _) if target.left.0.is_none() => Some((left, &mut target.left)),
                (_, Some(right)) if target.right.0.is_none() => Some((right, &mut target.right)),
                _ => None,
            };

            match next {
                Some((child, slot)) => {
                    let node = Node::allocate(child.value.clone(), Link(Some(to)))?;
                    slot.0 = Some(node);
                    copy.size += 1;
                    from = child;
                    to = node;
                }
                None if ptr::eq(from, source) => break,
                None => match (from.parent(), target.parent.0) {
                    (Some(parent), Some(target_parent)) => {
                        from = parent;
                        to = target_parent;
                    }
                    _ => break,
                },
            }
        }

        Ok(copy)
    }
}

impl<T, E, L> Tree<T, E, L>
where
    T: Clone,
    E: Equivalence<T> + Clone,
    L: Precedence<T> + Clone,
{
    /// Returns a new tree holding a copy of the subtree rooted at the value equivalent to
    /// `value`. If there is no such value the new tree is empty. The new tree's size is the
    /// number of nodes copied.
    ///
    /// # Errors
    ///
    /// [`Error::ResourceExhausted`] if any node couldn't be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniq_bst::{Natural, Tree};
    ///
    /// let mut tree = Tree::new(Natural, Natural);
    /// for x in [5, 3, 8, 1, 4] {
    ///     tree.add(x).unwrap();
    /// }
    ///
    /// let three = tree.subtree(&3).unwrap();
    /// assert_eq!(three.to_string(), "1 3 4");
    /// assert_eq!(three.size(), 3);
    ///
    /// // The source is untouched.
    /// assert_eq!(tree.size(), 5);
    /// ```
    pub fn subtree(&self, value: &T) -> Result<Self, Error> {
        let located = self.find(value);
        let subtree = self.copy_from(located)?;
        match located {
            Some(_) => log::trace!("copied subtree of {} values", subtree.size),
            None => log::trace!("subtree root not found"),
        }
        Ok(subtree)
    }
}

/// A non-owning pointer to a `Node`. A child link is the only owner of the node it points to; a
/// parent link owns nothing.
pub(crate) struct Link<T>(Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    fn node(&self) -> Option<&Node<T>> {
        // SAFETY: If the pointer is not `None` then it points to a live `Node`: nodes are only
        // freed by `Tree::clear`, which first detaches them. Handing out `&Node` through `&self`
        // can't alias a `&mut Node` because those only exist while the owning `Tree` is borrowed
        // mutably.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    fn points_to(&self, node: &Node<T>) -> bool {
        self.0 == Some(NonNull::from(node))
    }
}

pub(crate) struct Node<T> {
    value: T,
    parent: Link<T>,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Moves `value` into a freshly allocated leaf under `parent`. Unlike `Box::new`, running out
    /// of memory is reported instead of aborting.
    fn allocate(value: T, parent: Link<T>) -> Result<NonNull<Self>, Error> {
        let layout = Layout::new::<Self>();
        // SAFETY: A `Node` always holds its three links so `layout` is never zero-sized.
        let ptr = NonNull::new(unsafe { alloc::alloc(layout) }.cast::<Self>()).ok_or_else(|| {
            log::debug!("failed to allocate a node of {} bytes", layout.size());
            Error::ResourceExhausted
        })?;

        // SAFETY: `ptr` was just allocated with the layout of exactly one `Node` and nothing else
        // knows about it yet.
        unsafe {
            ptr.as_ptr().write(Node {
                value,
                parent,
                left: Link(None),
                right: Link(None),
            })
        };
        Ok(ptr)
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    fn parent(&self) -> Option<&Self> {
        self.parent.node()
    }

    /// The node holding the smallest value of the subtree rooted here.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The node holding the next value in ascending order, if any.
    ///
    /// With a right child, that's the smallest value on the right. Without one, climb while we're
    /// our parent's right child: the first parent we reach from its left side comes next. Running
    /// out of parents means this was the largest value.
    pub(crate) fn successor(&self) -> Option<&Self> {
        if let Some(right) = self.right() {
            return Some(right.leftmost());
        }

        let mut current = self;
        loop {
            match current.parent() {
                Some(parent) if parent.right.points_to(current) => current = parent,
                parent => return parent,
            }
        }
    }
}
