//! This crate exposes an unbalanced Binary Search Tree (BST) storing a set of unique values,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the number of levels on
//! the longest path from the root `Node` to a leaf `Node`). This tree never rebalances itself, so
//! inserting values that are already sorted builds a chain whose height is the number of values.
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use bstree::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.height(), 3);
//!
//! // 8 has two children so its successor, 9, takes its place.
//! assert!(tree.remove(&8));
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 9]);
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [5, 3, 1, 4, 9, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod tree;

pub use error::{Error, Result};
pub use iter::{Cursor, Order};
pub use tree::BinarySearchTree;
