//! Error types for tree mutations.
//!
//! Absence is only an error where the operation's contract demands presence:
//! [`Tree::remove`][crate::linked::Tree::remove] on a non-empty tree requires
//! the item to be there. Lookups treat absence as an ordinary outcome and
//! return `Option` instead.

use thiserror::Error;

/// Errors returned by operations on a [`Tree`][crate::linked::Tree].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The requested item was not present in a non-empty tree.
    #[error("item not found in tree")]
    NotFound,
}

/// Convenience alias for results of fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
