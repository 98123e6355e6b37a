use quickcheck_macros::quickcheck;

use uniq_bst::{Error, Natural, Tree};

use crate::{build, insertion_order};

#[quickcheck]
fn traversal_is_strictly_increasing(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let values: Vec<_> = tree.iter().collect();

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn second_add_is_a_duplicate(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let size = tree.size();

    xs.iter().all(|x| tree.add(*x) == Err(Error::DuplicateKey)) && tree.size() == size
}

#[quickcheck]
fn size_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.size() == insertion_order(&xs).len() && tree.iter().count() == tree.size()
}

#[quickcheck]
fn root_is_first_inserted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    match xs.first() {
        Some(first) => tree.root() == Ok(first),
        None => tree.root() == Err(Error::EmptyCollection) && tree.is_empty(),
    }
}

#[quickcheck]
fn contains_only_added_values(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree = build(&xs);

    probes.iter().all(|p| tree.contains(p) == xs.contains(p))
}

#[quickcheck]
fn copies_are_independent(xs: Vec<i8>, more: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let copy = tree.clone();
    let expected: Vec<i8> = copy.iter().copied().collect();

    for x in more {
        let _ = tree.add(x);
    }
    let still_same = copy.iter().copied().eq(expected.iter().copied());
    tree.clear();

    still_same && copy.size() == expected.len() && copy.iter().copied().eq(expected)
}

#[quickcheck]
fn clone_from_matches_source(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let source = build(&xs);
    let mut target = build(&ys);
    target.clone_from(&source);

    target.size() == source.size() && target.iter().eq(source.iter())
}

/// In a BST built by insertion, `v` is an ancestor of (or is) `w` exactly when `v` was inserted
/// first among all values between `v` and `w`.
fn in_subtree_of(order: &[i8], v: i8, w: i8) -> bool {
    let (low, high) = if v < w { (v, w) } else { (w, v) };
    order.iter().find(|x| (low..=high).contains(*x)) == Some(&v)
}

#[quickcheck]
fn subtree_matches_original_subtree(xs: Vec<i8>, v: i8) -> bool {
    let tree = build(&xs);
    let subtree = tree.subtree(&v).unwrap();

    if !tree.contains(&v) {
        return subtree.is_empty() && subtree.size() == 0;
    }

    let order = insertion_order(&xs);
    let expected: Vec<i8> = tree
        .iter()
        .copied()
        .filter(|w| in_subtree_of(&order, v, *w))
        .collect();

    subtree.root() == Ok(&v)
        && subtree.size() == expected.len()
        && subtree.iter().copied().eq(expected)
}

#[quickcheck]
fn subtree_of_subtree_keeps_shape(xs: Vec<i8>, v: i8) -> bool {
    let tree = build(&xs);
    let subtree = tree.subtree(&v).unwrap();

    subtree.iter().all(|w| {
        let nested = subtree.subtree(w).unwrap();
        let direct = tree.subtree(w).unwrap();
        nested.root() == direct.root() && nested.iter().eq(direct.iter())
    })
}

#[quickcheck]
fn sorted_reinsertion_round_trips(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut chain = Tree::new(Natural, Natural);
    for x in &tree {
        chain.add(*x).unwrap();
    }

    chain.iter().eq(tree.iter()) && chain.root() == tree.iter().next().ok_or(Error::EmptyCollection)
}

#[quickcheck]
fn begin_reaches_end_after_size_steps(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut cursor = tree.begin();
    for _ in 0..tree.size() {
        if cursor.is_end() {
            return false;
        }
        cursor.move_next();
    }

    cursor == tree.end()
}
