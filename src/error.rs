//! Errors surfaced by the tree.
//!
//! Ordinary outcomes like inserting a duplicate or removing a missing value are reported as
//! `bool`s by the tree itself. The only failure that needs a richer type is a detached
//! [`Cursor`][crate::Cursor] stepping over a tree that changed underneath it.

/// Errors that can occur while working with a [`BinarySearchTree`][crate::BinarySearchTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A cursor was stepped after the tree was structurally modified, or with a tree other than
    /// the one it was created from.
    #[error("stale iterator: tree is no longer the one the cursor was created from (generation {expected}, now {found})")]
    StaleIterator {
        /// The tree's generation when the cursor was created.
        expected: u64,
        /// The tree's generation when the cursor was stepped.
        found: u64,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
