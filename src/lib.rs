//! This crate exposes a link-based Binary Search Tree (BST) with explicit,
//! on-demand rebalancing, mostly for educational and benchmarking purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value (equal values route
//!    right, so duplicates are permitted).
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! The tree in this crate does **not** maintain a height bound on every
//! insertion the way an AVL or red-black tree does. Inserting values in
//! sorted order degrades it into a linked list. Instead, [`linked::Tree`]
//! offers [`rebalance`][linked::Tree::rebalance], a whole-tree operation
//! that rebuilds the minimal-height shape from the sorted contents. The
//! benchmarks under `benches/` compare linear-scan search against searches
//! in skewed and rebalanced trees to show why you would want to call it.

#![deny(missing_docs)]

pub mod errors;
pub mod linked;

mod stack;
