use linked_bst::errors::TreeError;
use linked_bst::linked::Tree;

use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Removes one occurrence of `item` from the reference multiset, the way a
/// single tree removal should.
fn reference_remove(reference: &mut Vec<i8>, item: i8) -> Option<i8> {
    reference
        .iter()
        .position(|x| *x == item)
        .map(|pos| reference.remove(pos))
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    tree.inorder().windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn size_tracks_operations(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut reference: Vec<i8> = Vec::new();

    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(x);
                reference.push(x);
            }
            Op::Remove(x) => {
                let expected = match reference_remove(&mut reference, x) {
                    Some(removed) => Ok(Some(removed)),
                    None if tree.is_empty() => Ok(None),
                    None => Err(TreeError::NotFound),
                };
                if tree.remove(&x) != expected {
                    return false;
                }
            }
        }
        if tree.len() != reference.len() || tree.inorder().len() != reference.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn contains_all_inserted(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn rebalance_preserves_contents(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    tree.rebalance();

    let mut sorted = xs;
    sorted.sort_unstable();

    let inorder: Vec<i8> = tree.inorder().into_iter().copied().collect();
    inorder == sorted && (sorted.is_empty() || tree.is_balanced())
}

#[quickcheck]
fn preorder_visits_every_value_once(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    let mut visited: Vec<i8> = tree.iter().copied().collect();
    visited.sort_unstable();

    let mut expected = xs;
    expected.sort_unstable();

    visited == expected
}

#[quickcheck]
fn removals_leave_a_valid_tree(xs: Vec<i8>, removals: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let mut reference: Vec<i8> = xs;

    for item in removals {
        let _ = tree.remove(&item);
        reference_remove(&mut reference, item);

        let inorder = tree.inorder();
        if inorder.windows(2).any(|w| w[0] > w[1]) || inorder.len() != reference.len() {
            return false;
        }
    }

    true
}
