//! A minimal last-in-first-out stack backing the iterative tree walks.
//!
//! The tree deliberately avoids unbounded call-stack recursion on
//! arbitrarily skewed trees: descents reborrow their way down the child
//! links, and everything that visits whole subtrees (iteration, teardown,
//! height, clone, rendering) drives an explicit `Stack` instead.

pub(crate) struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
}
