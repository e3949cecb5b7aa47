//! Traversals over a [`BinarySearchTree`].
//!
//! Each traversal is a lazy external iterator that borrows the tree, so the tree can't change
//! while one is alive. Calling the traversal method again starts a fresh walk.
//!
//! [`Cursor`] is the detached alternative for callers that need to modify the tree between
//! steps. It keeps no borrow and instead checks that the tree is unchanged each time it is
//! stepped.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use log::warn;

use crate::error::{Error, Result};
use crate::tree::{BinarySearchTree, Node};

/// The order in which a traversal visits values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Root, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, then root, then right subtree. This is ascending order.
    Inorder,
    /// Left subtree, then right subtree, then root.
    Postorder,
    /// Breadth first, shallowest nodes first.
    LevelOrder,
}

/// Implements the traits shared by every traversal. `Clone` is written by hand so iterators can be
/// cloned even when `T` isn't `Clone`.
macro_rules! traversal_traits {
    ($name:ident { $($field:ident),* }) => {
        impl<'a, T> Clone for $name<'a, T> {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone(),)*
                    remaining: self.remaining,
                }
            }
        }

        impl<'a, T> ExactSizeIterator for $name<'a, T> {}

        impl<'a, T> FusedIterator for $name<'a, T> {}
    };
}

/// Preorder iterator returned by [`BinarySearchTree::preorder`].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is visited before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

traversal_traits!(Preorder { stack });

/// Inorder iterator returned by [`BinarySearchTree::inorder`]. Yields values in ascending order.
pub struct Inorder<'a, T> {
    /// The nodes whose left subtrees are being (or have been) visited, deepest last.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

traversal_traits!(Inorder { stack });

/// Postorder iterator returned by [`BinarySearchTree::postorder`].
pub struct Postorder<'a, T> {
    /// Each node is pushed unexpanded, then pushed again expanded above its children. An
    /// expanded node is only popped once both of its subtrees are done.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(&node.value);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

traversal_traits!(Postorder { stack });

/// Level-order iterator returned by [`BinarySearchTree::level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

traversal_traits!(LevelOrder { queue });

/// A traversal whose [`Order`] was chosen at runtime. Returned by
/// [`BinarySearchTree::traverse`].
pub enum Traversal<'a, T> {
    /// See [`Preorder`].
    Preorder(Preorder<'a, T>),
    /// See [`Inorder`].
    Inorder(Inorder<'a, T>),
    /// See [`Postorder`].
    Postorder(Postorder<'a, T>),
    /// See [`LevelOrder`].
    LevelOrder(LevelOrder<'a, T>),
}

impl<'a, T> Clone for Traversal<'a, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Preorder(iter) => Self::Preorder(iter.clone()),
            Self::Inorder(iter) => Self::Inorder(iter.clone()),
            Self::Postorder(iter) => Self::Postorder(iter.clone()),
            Self::LevelOrder(iter) => Self::LevelOrder(iter.clone()),
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Preorder(iter) => iter.next(),
            Self::Inorder(iter) => iter.next(),
            Self::Postorder(iter) => iter.next(),
            Self::LevelOrder(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Preorder(iter) => iter.size_hint(),
            Self::Inorder(iter) => iter.size_hint(),
            Self::Postorder(iter) => iter.size_hint(),
            Self::LevelOrder(iter) => iter.size_hint(),
        }
    }
}

impl<'a, T> ExactSizeIterator for Traversal<'a, T> {}

impl<'a, T> FusedIterator for Traversal<'a, T> {}

/// A traversal that doesn't borrow the tree. Created by [`BinarySearchTree::cursor`] and stepped
/// with [`Cursor::step`], passing the same tree each time.
///
/// The cursor remembers the tree's size and generation when it was created. Generations are
/// unique across all trees, and a clone starts at a fresh one, so stepping with a tree that was
/// modified, or with any tree other than the one that created the cursor, fails with
/// [`Error::StaleIterator`]. Every later step fails the same way.
///
/// Each step walks the tree again from the root up to the cursor's position, so stepping through
/// a whole tree is quadratic. Prefer the borrowing iterators when nothing needs to change midway.
#[derive(Debug, Clone)]
pub struct Cursor {
    order: Order,
    len: usize,
    generation: u64,
    position: usize,
    stale: bool,
}

impl Cursor {
    pub(crate) fn new(order: Order, len: usize, generation: u64) -> Self {
        Self {
            order,
            len,
            generation,
            position: 0,
            stale: false,
        }
    }

    /// The order this cursor visits values in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// How many values the cursor has yet to yield, assuming the tree is unchanged.
    pub fn remaining(&self) -> usize {
        self.len - self.position
    }

    /// Yields the next value, `Ok(None)` once every value has been visited, or an error if the
    /// tree was modified after this cursor was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BinarySearchTree, Order};
    ///
    /// let tree: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let mut cursor = tree.cursor(Order::Preorder);
    ///
    /// let mut seen = Vec::new();
    /// while let Some(value) = cursor.step(&tree)? {
    ///     seen.push(*value);
    /// }
    /// assert_eq!(seen, [2, 1, 3]);
    /// # Ok::<(), bstree::Error>(())
    /// ```
    pub fn step<'a, T>(&mut self, tree: &'a BinarySearchTree<T>) -> Result<Option<&'a T>> {
        let found = tree.generation();
        if self.stale || found != self.generation || tree.len() != self.len {
            if !self.stale {
                warn!(
                    "{:?} cursor is stale: created at generation {} with {} nodes, tree is now at generation {} with {} nodes",
                    self.order,
                    self.generation,
                    self.len,
                    found,
                    tree.len()
                );
                self.stale = true;
            }
            return Err(Error::StaleIterator {
                expected: self.generation,
                found,
            });
        }

        let value = tree.traverse(self.order).nth(self.position);
        if value.is_some() {
            self.position += 1;
        }
        Ok(value)
    }
}
