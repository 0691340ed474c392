//! A link-based BST. Every node is owned by exactly one place (its
//! parent's child slot, or the tree's root slot), so restructuring
//! operations move `Box`es between slots instead of juggling shared
//! references.
//!
//! The tree never rebalances itself behind your back. Skewed insertion
//! orders produce skewed shapes, and [`Tree::rebalance`] is the explicit
//! whole-tree repair.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let mut tree: Tree<i32> = (1..=7).collect();
//!
//! // Ascending insertion order degrades the shape into a list...
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! // ...until the tree is explicitly rebalanced.
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//!
//! // Contents are unaffected either way.
//! assert_eq!(tree.inorder(), vec![&1, &2, &3, &4, &5, &6, &7]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::errors::{TreeError, TreeResult};
use crate::stack::Stack;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }
}

/// A link-based Binary Search Tree storing one ordered value per node.
///
/// Values act as their own keys; there is no separate key/value split.
/// Duplicates are permitted and route to the right subtree on insertion,
/// while lookups and removals act on the shallowest equal match.
#[derive(Debug)]
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Tree<T> {
    // Copies the structure with an explicit stack of (source node, empty
    // destination slot) pairs, so a deep, skewed tree cannot overflow the
    // call stack through nested node clones.
    fn clone(&self) -> Self {
        let mut root = None;
        let mut stack = Stack::new();
        if let Some(src) = self.root.as_deref() {
            stack.push((src, &mut root));
        }
        while let Some((src, slot)) = stack.pop() {
            let node = slot.get_or_insert_with(|| Box::new(Node::new(src.data.clone())));
            if let Some(left) = src.left.as_deref() {
                stack.push((left, &mut node.left));
            }
            if let Some(right) = src.right.as_deref() {
                stack.push((right, &mut node.right));
            }
        }
        Self {
            root,
            size: self.size,
        }
    }
}

impl<T> Drop for Tree<T> {
    // Tear down with an explicit stack so a deep, skewed tree cannot
    // overflow the call stack through nested `Box` drops.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Makes the tree empty, dropping every stored value.
    pub fn clear(&mut self) {
        let mut stack = Stack::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
        self.size = 0;
    }

    /// Potentially finds the stored value equal to `item`. If no node holds
    /// an equal value, `None` is returned. With duplicates present, the
    /// shallowest match wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match item.cmp(&node.data) {
                Ordering::Equal => return Some(&node.data),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Returns `true` if a value equal to `item` is stored in the tree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Inserts `item` as a new leaf. An equal value that is already present
    /// is never overwritten; the new value routes into the right subtree,
    /// so the tree grows by one node on every call.
    ///
    /// No rebalancing happens here. Inserting values in sorted order
    /// produces a maximally skewed tree; see [`Tree::rebalance`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(5);
    /// tree.add(5);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(item)));
        self.size += 1;
    }

    /// Removes the shallowest value equal to `item` and returns it.
    ///
    /// Removing from an empty tree is a no-op and yields `Ok(None)`.
    /// Removing a value that is absent from a non-empty tree is an error:
    /// the item was expected to be there. The presence check completes
    /// before any restructuring starts, so a failed `remove` leaves the
    /// tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::errors::TreeError;
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.remove(&1), Ok(None));
    ///
    /// tree.add(1);
    /// assert_eq!(tree.remove(&2), Err(TreeError::NotFound));
    /// assert_eq!(tree.remove(&1), Ok(Some(1)));
    /// ```
    pub fn remove(&mut self, item: &T) -> TreeResult<Option<T>>
    where
        T: Ord,
    {
        if self.root.is_none() {
            return Ok(None);
        }
        let removed = Self::remove_from(&mut self.root, item)?;
        self.size -= 1;
        Ok(Some(removed))
    }

    /// Walks down to the owning link of the shallowest value equal to
    /// `item` and unlinks its node. The descent reborrows its way down the
    /// child slots (the same move [`Tree::add`] uses) rather than recursing,
    /// so a skewed spine cannot overflow the call stack.
    fn remove_from(mut link: &mut Link<T>, item: &T) -> TreeResult<T>
    where
        T: Ord,
    {
        loop {
            let ordering = match link.as_deref() {
                None => return Err(TreeError::NotFound),
                Some(node) => item.cmp(&node.data),
            };
            match ordering {
                Ordering::Less => link = &mut link.as_mut().unwrap().left,
                Ordering::Greater => link = &mut link.as_mut().unwrap().right,
                Ordering::Equal => return Ok(Self::unlink(link)),
            }
        }
    }

    /// Removes the node held by `link`, which must be occupied, and returns
    /// its value. Three structural cases:
    ///
    /// * two children: the node keeps its position but its value is
    ///   replaced by its in-order predecessor (the largest value in the
    ///   left subtree), whose node is spliced out in turn,
    /// * one child: the owning link is pointed at that child,
    /// * leaf: the owning link becomes empty.
    fn unlink(link: &mut Link<T>) -> T {
        let mut node = link.take().expect("unlink requires an occupied link");
        if node.left.is_some() && node.right.is_some() {
            let pred = Self::detach_max(&mut node.left)
                .expect("a node with two children has a left subtree");
            let removed = mem::replace(&mut node.data, pred.data);
            *link = Some(node);
            removed
        } else {
            *link = node.left.take().or_else(|| node.right.take());
            node.data
        }
    }

    /// Detaches the node holding the largest value reachable from `link`,
    /// leaving that node's left child (possibly empty) in its place.
    fn detach_max(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
        while link.as_deref().map_or(false, |node| node.right.is_some()) {
            link = &mut link.as_mut().unwrap().right;
        }
        let mut max = link.take()?;
        *link = max.left.take();
        Some(max)
    }

    /// Overwrites the shallowest stored value equal to `item` with
    /// `new_item`, in place, and returns the old value. Returns `None` if
    /// no equal value is stored.
    ///
    /// The node is **not** repositioned. The caller must pick a `new_item`
    /// that preserves the node's relative order; otherwise later lookups in
    /// the affected subtree silently miss.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(5);
    /// tree.add(3);
    ///
    /// // 4 sorts the same way 3 did relative to 5, so this is safe.
    /// assert_eq!(tree.replace(&3, 4), Some(3));
    /// assert_eq!(tree.find(&4), Some(&4));
    /// assert_eq!(tree.replace(&3, 2), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match item.cmp(&node.data) {
                Ordering::Equal => return Some(mem::replace(&mut node.data, new_item)),
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Returns the height of the tree: the number of edges on the longest
    /// path from the root to a leaf. An empty tree has height `-1`, so a
    /// single-node tree has height `0`.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack = Stack::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Returns `true` if the tree's height is within a constant factor of
    /// the height of a perfectly balanced tree with the same number of
    /// values: `height < 2 * log2(size + 1) - 1`.
    ///
    /// This is a whole-tree heuristic, not a per-node invariant. An empty
    /// tree is not considered balanced.
    pub fn is_balanced(&self) -> bool {
        (self.height() as f64) < 2.0 * ((self.size + 1) as f64).log2() - 1.0
    }

    /// Returns the stored values `v` with `low <= v <= high`, in ascending
    /// order.
    ///
    /// This filters a full in-order traversal, so it costs O(n) regardless
    /// of how narrow the bounds are.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<i32> = vec![1, 5, 9, 12, 20].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&4, &12), vec![&5, &9, &12]);
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        self.inorder()
            .into_iter()
            .filter(|v| low <= *v && *v <= high)
            .collect()
    }

    /// Rebuilds the tree into the minimal-height shape holding the same
    /// multiset of values, and returns `&mut self` for chaining.
    ///
    /// The values are collected in ascending order and the new shape is
    /// built by repeatedly taking the middle of each run
    /// (`ceil((len - 1) / 2)`) as the subtree root, which yields height
    /// `ceil(log2(n + 1)) - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<i32> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.rebalance().height(), 2);
    /// ```
    pub fn rebalance(&mut self) -> &mut Self {
        let mut values = Vec::with_capacity(self.size);
        Self::drain_inorder(self.root.take(), &mut values);
        self.root = Self::build_balanced(values);
        self
    }

    /// Consumes every node reachable from `root`, pushing the values onto
    /// `out` in ascending order. Iterative so that skewed trees cannot
    /// overflow the call stack.
    fn drain_inorder(root: Link<T>, out: &mut Vec<T>) {
        let mut stack = Stack::new();
        let mut current = root;
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                Some(mut node) => {
                    current = node.right.take();
                    out.push(node.data);
                }
                None => break,
            }
        }
    }

    /// Builds the minimal-height tree over an already-sorted sequence by
    /// taking the element at `ceil((len - 1) / 2)` (equivalently `len / 2`)
    /// as the root of each subtree.
    fn build_balanced(mut values: Vec<T>) -> Link<T> {
        if values.is_empty() {
            return None;
        }
        let mut upper = values.split_off(values.len() / 2);
        let data = upper.remove(0);
        Some(Box::new(Node {
            data,
            left: Self::build_balanced(values),
            right: Self::build_balanced(upper),
        }))
    }

    /// Returns the stored values in ascending order, materialized into a
    /// `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<i32> = vec![2, 3, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.inorder(), vec![&1, &2, &3]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        let mut stack = Stack::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    out.push(&node.data);
                    current = node.right.as_deref();
                }
                None => break,
            }
        }
        out
    }

    /// Returns a lazy pre-order iterator over the stored values: each node
    /// is yielded before anything in its subtrees, left subtree first.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<i32> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&5, &3, &8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut stack = Stack::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        Iter { stack }
    }

    /// Not implemented: always returns `None`. Kept so the contract surface
    /// matches the other traversals; use [`Tree::iter`] or
    /// [`Tree::inorder`] instead.
    pub fn postorder(&self) -> Option<Vec<&T>> {
        None
    }

    /// Not implemented: always returns `None`. Kept so the contract surface
    /// matches the other traversals; use [`Tree::iter`] or
    /// [`Tree::inorder`] instead.
    pub fn levelorder(&self) -> Option<Vec<&T>> {
        None
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// A lazy pre-order iterator over a [`Tree`], driven by an explicit stack:
/// pop a node, yield its value, push its right child then its left child so
/// the left subtree is visited first.
pub struct Iter<'a, T> {
    stack: Stack<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.data)
    }
}

/// Renders the tree rotated 90 degrees counterclockwise: the right subtree
/// on top, one value per line, `"| "` per level of depth.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    // A reverse in-order walk (right subtree, node, left subtree) with the
    // same stack discipline as `inorder`, tracking each node's depth for
    // the indent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Stack::new();
        let mut current = self.root.as_deref().map(|root| (root, 0));
        loop {
            while let Some((node, level)) = current {
                stack.push((node, level));
                current = node.right.as_deref().map(|right| (right, level + 1));
            }
            match stack.pop() {
                Some((node, level)) => {
                    for _ in 0..level {
                        f.write_str("| ")?;
                    }
                    writeln!(f, "{}", node.data)?;
                    current = node.left.as_deref().map(|left| (left, level + 1));
                }
                None => break,
            }
        }
        Ok(())
    }
}
