//! An unbalanced Binary Search Tree holding a set of distinct values. Every node owns its
//! children through a `Box`. Mutations first walk down to the affected child slot by comparing
//! against borrowed nodes and only then detach or splice, so a panicking `Ord` leaves the tree as
//! it was.
//!
//! # Examples
//!
//! ```
//! use bstree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Values are unique so a second insert is refused.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::sync::atomic::{self, AtomicU64};

use log::{debug, trace};

use crate::iter::{Cursor, Inorder, LevelOrder, Order, Postorder, Preorder, Traversal};

/// An owned slot for a child. `None` marks the empty position below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Source of generations shared by every tree, so no two trees (or a tree and its clone) are
/// ever at the same generation.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, atomic::Ordering::Relaxed)
}

/// A Binary Search Tree of unique values ordered by their [`Ord`] implementation. Nothing is
/// rebalanced so inserting already sorted values builds a chain whose height equals its length.
///
/// Lookups, insertion, removal and dropping walk the tree with loops. [`height`][Self::height]
/// and `clone` recurse once per level, so their stack depth grows with the height of the tree.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
    /// Replaced with a fresh value on every successful structural change. Detached cursors
    /// compare against it.
    generation: u64,
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            generation: next_generation(),
        }
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        Node::release(self.root.take());
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            generation: next_generation(),
        }
    }

    /// Returns how many values are stored in the tree.
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of levels on the longest path from the root to a leaf. An empty tree
    /// has height 0 and a lone root has height 1. Heights aren't cached so this walks every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Ascending inserts degrade into a chain.
    /// tree.extend(vec![1, 2, 3, 4]);
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        Node::height(self.root.as_deref())
    }

    /// Returns the smallest value in the tree, if any.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree, if any.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }

        Node::release(self.root.take());
        self.len = 0;
        self.generation = next_generation();
        trace!("cleared tree");
    }

    /// Visits values root first, then the left subtree, then the right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref(), self.len)
    }

    /// Visits values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![5, 3, 8, 1].into_iter().collect();
    /// let sorted: Vec<_> = tree.inorder().copied().collect();
    ///
    /// assert_eq!(sorted, [1, 3, 5, 8]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref(), self.len)
    }

    /// Visits the left subtree, then the right subtree, then the root.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref(), self.len)
    }

    /// Visits values one depth at a time, left to right within a depth.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root.as_deref(), self.len)
    }

    /// Same as [`inorder`][Self::inorder].
    pub fn iter(&self) -> Inorder<'_, T> {
        self.inorder()
    }

    /// Visits values in an order picked at runtime.
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        match order {
            Order::Preorder => Traversal::Preorder(self.preorder()),
            Order::Inorder => Traversal::Inorder(self.inorder()),
            Order::Postorder => Traversal::Postorder(self.postorder()),
            Order::LevelOrder => Traversal::LevelOrder(self.level_order()),
        }
    }

    /// Creates a [`Cursor`] that walks this tree in the given order without borrowing it. The
    /// cursor refuses to continue once the tree has been modified, or when it is stepped with a
    /// different tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BinarySearchTree, Error, Order};
    ///
    /// let mut tree: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let mut cursor = tree.cursor(Order::Inorder);
    ///
    /// assert_eq!(cursor.step(&tree), Ok(Some(&1)));
    ///
    /// tree.insert(4);
    /// assert!(matches!(cursor.step(&tree), Err(Error::StaleIterator { .. })));
    /// ```
    pub fn cursor(&self, order: Order) -> Cursor {
        Cursor::new(order, self.len, self.generation)
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` if the tree contains the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert("kiwi");
    ///
    /// assert!(tree.contains(&"kiwi"));
    /// assert!(!tree.contains(&"plum"));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Adds a value to the tree. Returns `false` and leaves the tree untouched if an equal value
    /// is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.insert(7));
    /// assert!(!tree.insert(7));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[doc(alias = "add")]
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        self.generation = next_generation();
        trace!("inserted value, tree now holds {} nodes", self.len);
        true
    }

    /// Removes the value from the tree. Returns `false` if it wasn't stored, in which case the
    /// tree is left exactly as it was.
    ///
    /// A node with two children takes its in-order successor's value and the successor's node is
    /// unlinked instead, so the sorted order of the rest of the tree is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = vec![5, 3, 8, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.remove(&8));
    /// assert!(!tree.remove(&8));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 7, 9]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return false,
            };
            if ordering == Ordering::Equal {
                break;
            }

            slot = match slot {
                Some(node) => {
                    if ordering == Ordering::Less {
                        &mut node.left
                    } else {
                        &mut node.right
                    }
                }
                None => return false,
            };
        }

        if let Some(node) = slot.take() {
            *slot = node.unlink();
        }
        self.len -= 1;
        self.generation = next_generation();
        trace!("removed value, tree now holds {} nodes", self.len);
        true
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// A single value in the tree along with its (possibly empty) subtrees.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn height(node: Option<&Self>) -> usize {
        node.map_or(0, |n| {
            1 + Self::height(n.left.as_deref()).max(Self::height(n.right.as_deref()))
        })
    }

    /// Drops a subtree one node at a time so long chains don't recurse once per level.
    fn release(link: Link<T>) {
        let mut pending: Vec<Box<Self>> = link.into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }

    /// Returns the subtree that should take this node's place once its value is dropped. A node
    /// with two children keeps its place and takes its in-order successor's value instead.
    fn unlink(mut self: Box<Self>) -> Link<T> {
        match (self.left.take(), self.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (Some(left), Some(right)) => {
                debug!("removing node with two children, promoting its in-order successor");
                let (successor, rest) = right.take_min();
                self.value = successor;
                self.left = Some(left);
                self.right = rest;
                Some(self)
            }
        }
    }

    /// Unlinks the leftmost node of this subtree and returns its value along with what remains.
    /// The leftmost node never has a left child so splicing in its right child is enough.
    fn take_min(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            Some(left) => {
                let (min, rest) = left.take_min();
                self.left = rest;
                (min, Some(self))
            }
            None => {
                let Node { value, right, .. } = *self;
                (value, right)
            }
        }
    }
}
