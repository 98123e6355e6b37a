//! Property tests against the public API.

mod tree;

use std::collections::BTreeSet;

use uniq_bst::{Natural, Tree};

type IntTree = Tree<i8, Natural, Natural>;

/// Builds a tree from `xs` in order, skipping values already added.
fn build(xs: &[i8]) -> IntTree {
    let mut tree = Tree::new(Natural, Natural);
    for x in xs {
        let _ = tree.add(*x);
    }
    tree
}

/// `xs` without repeats, keeping the first occurrence of each value.
fn insertion_order(xs: &[i8]) -> Vec<i8> {
    let mut seen = BTreeSet::new();
    xs.iter().copied().filter(|x| seen.insert(*x)).collect()
}
