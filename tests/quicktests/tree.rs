use bstree::BinarySearchTree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removals we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, set: &mut HashSet<T>)
where
    T: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                assert_eq!(bst.insert(v.clone()), set.insert(v.clone()));
            }
            Op::Remove(v) => {
                assert_eq!(bst.remove(v), set.remove(v));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|v| tree.contains(v))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn len_counts_distinct_values(xs: Vec<i16>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len() && tree.is_empty() == distinct.is_empty()
}

#[quickcheck]
fn duplicate_insert_is_refused(xs: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let len = tree.len();

    xs.iter().all(|x| !tree.insert(*x)) && tree.len() == len
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn remove_decrements_len(xs: Vec<i8>, victim: i8) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let len = tree.len();
    let present = tree.contains(&victim);

    let removed = tree.remove(&victim);
    let expected_len = if present { len - 1 } else { len };

    removed == present && tree.len() == expected_len && !tree.contains(&victim)
}

#[quickcheck]
fn remove_absent_keeps_shape(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().filter(|x| *x != absent).collect();
    let before: Vec<_> = tree.preorder().copied().collect();

    !tree.remove(&absent) && tree.preorder().copied().eq(before)
}

#[quickcheck]
fn increasing_inserts_build_a_chain(n: u8) -> bool {
    let tree: BinarySearchTree<_> = (0..n).collect();

    tree.height() == n as usize
}

#[quickcheck]
fn height_is_bounded_by_len(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let len = tree.len();
    let height = tree.height();

    // A tree of `len` nodes has at least floor(lg len) + 1 levels.
    let min_height = if len == 0 {
        0
    } else {
        (usize::BITS - len.leading_zeros()) as usize
    };
    height <= len && height >= min_height
}

#[quickcheck]
fn min_and_max_match_set(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    tree.min() == set.iter().next() && tree.max() == set.iter().next_back()
}
