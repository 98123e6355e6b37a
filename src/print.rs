//! Printing the values of a tree that satisfy a predicate.

use std::fmt::Display;
use std::io::{self, Write};

use crate::Tree;

/// Writes every value of `tree` for which `predicate` holds to `out`, in ascending order,
/// separated by single spaces and followed by a newline. The tree is only read.
///
/// # Examples
///
/// ```
/// use uniq_bst::{write_if, Natural, Tree};
///
/// let mut tree = Tree::new(Natural, Natural);
/// for x in [6, 4, 8, 2, 5, 1, 3, 7, 9] {
///     tree.add(x).unwrap();
/// }
///
/// let mut out = Vec::new();
/// write_if(&tree, &mut out, |x| x % 2 == 0).unwrap();
/// assert_eq!(out, b"2 4 6 8\n");
/// ```
pub fn write_if<T, E, L, W, P>(tree: &Tree<T, E, L>, out: &mut W, mut predicate: P) -> io::Result<()>
where
    T: Display,
    W: Write + ?Sized,
    P: FnMut(&T) -> bool,
{
    let mut matching = tree.iter().filter(|value| predicate(*value));
    if let Some(first) = matching.next() {
        write!(out, "{}", first)?;
        for value in matching {
            write!(out, " {}", value)?;
        }
    }
    writeln!(out)
}

/// [`write_if`] to standard output.
pub fn print_if<T, E, L, P>(tree: &Tree<T, E, L>, predicate: P) -> io::Result<()>
where
    T: Display,
    P: FnMut(&T) -> bool,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_if(tree, &mut out, predicate)
}
