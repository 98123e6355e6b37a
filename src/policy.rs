//! The two strategies a [`Tree`][crate::Tree] is parametrized over.
//!
//! A tree never compares values on its own. It asks an [`Equivalence`] whether two values are
//! the same element and a [`Precedence`] whether one strictly comes before the other. Both must
//! agree: two values are equivalent exactly when neither precedes the other. Both must also be
//! stable for as long as the tree lives, since every stored node was placed using them.
//!
//! Any closure `Fn(&T, &T) -> bool` is a policy, so most callers never name these traits:
//!
//! ```
//! use uniq_bst::Tree;
//!
//! let mut tree = Tree::new(
//!     |a: &(i32, i32), b: &(i32, i32)| a == b,
//!     |a: &(i32, i32), b: &(i32, i32)| (a.0, a.1) < (b.0, b.1),
//! );
//!
//! tree.add((3, 4)).unwrap();
//! tree.add((1, 1)).unwrap();
//! tree.add((3, -2)).unwrap();
//! assert_eq!(tree.root(), Ok(&(3, 4)));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&(1, 1), &(3, -2), &(3, 4)]);
//! ```

/// Decides whether two values are the same element of a tree.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `a` and `b` are the same element.
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Decides whether one value strictly comes before another.
pub trait Precedence<T: ?Sized> {
    /// Returns `true` if `a` strictly comes before `b`.
    fn less_than(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Equivalence<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

impl<T, F> Precedence<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn less_than(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Both policies taken from `T`'s own [`Ord`] implementation.
///
/// This is never picked for you; pass it explicitly for each slot.
///
/// ```
/// use uniq_bst::{Natural, Tree};
///
/// let mut tree = Tree::new(Natural, Natural);
/// tree.add("pear").unwrap();
/// tree.add("apple").unwrap();
/// assert_eq!(tree.iter().collect::<Vec<_>>(), [&"apple", &"pear"]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Equivalence<T> for Natural {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: Ord + ?Sized> Precedence<T> for Natural {
    fn less_than(&self, a: &T, b: &T) -> bool {
        a < b
    }
}
