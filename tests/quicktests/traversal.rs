use bstree::{BinarySearchTree, Order};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

const ORDERS: [Order; 4] = [
    Order::Preorder,
    Order::Inorder,
    Order::Postorder,
    Order::LevelOrder,
];

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let values: Vec<_> = tree.inorder().collect();

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn inorder_matches_sorted_set(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    tree.inorder().eq(set.iter())
}

#[quickcheck]
fn every_order_visits_every_value_once(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    ORDERS.iter().all(|order| {
        let mut seen: Vec<_> = tree.traverse(*order).copied().collect();
        seen.sort_unstable();
        seen.into_iter().eq(set.iter().copied())
    })
}

#[quickcheck]
fn preorder_rebuilds_identical_tree(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let rebuilt: BinarySearchTree<_> = tree.preorder().copied().collect();

    ORDERS
        .iter()
        .all(|order| tree.traverse(*order).eq(rebuilt.traverse(*order)))
}

#[quickcheck]
fn postorder_is_reversed_mirror_preorder(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    // Negating every value mirrors the tree left to right.
    let mirrored: BinarySearchTree<_> = xs.iter().map(|x| -(*x as i16)).collect();

    let mut postorder: Vec<_> = tree.postorder().map(|x| -(*x as i16)).collect();
    postorder.reverse();
    mirrored.preorder().copied().eq(postorder)
}

#[quickcheck]
fn level_order_starts_at_root(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    tree.level_order().next() == xs.first() && tree.preorder().next() == xs.first()
}

#[quickcheck]
fn cursor_agrees_with_iterators(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    ORDERS.iter().all(|order| {
        let mut cursor = tree.cursor(*order);
        let mut seen = Vec::new();
        while let Ok(Some(value)) = cursor.step(&tree) {
            seen.push(value);
        }
        tree.traverse(*order).eq(seen)
    })
}

#[quickcheck]
fn cursor_goes_stale_after_successful_mutation(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: BinarySearchTree<_> = xs.into_iter().collect();
    let mut cursor = tree.cursor(Order::Inorder);

    let mutated = if tree.contains(&x) {
        tree.remove(&x)
    } else {
        tree.insert(x)
    };

    mutated && cursor.step(&tree).is_err()
}
