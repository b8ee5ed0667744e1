//! Arena-backed binary tree with a bounded in-order iterator.
//!
//! Nodes live in a [`NodeArena`] and reference their children by [`NodeId`],
//! so the iterator can hold plain ids instead of borrowed node pointers.
//! [`InOrderIter`] carries an explicit stack of the ancestors-plus-self chain
//! down to the current position: O(height) space at any pause point, never
//! O(size).
//!
//! ## Architecture
//!
//! ```text
//!   tree:        2           in_order() stack evolution:
//!              /   \
//!             1     3        start:     [2, 1]     (leftmost chain from root)
//!                            next → 1:  [2]
//!                            next → 2:  [3]        (2's right child pushed)
//!                            next → 3:  []         has_next() = false
//! ```
//!
//! The iterator borrows the tree immutably for its whole lifetime, so the
//! "tree must not be mutated during iteration" rule is enforced by the
//! borrow checker rather than documentation. Exhaustion is signaled by the
//! `None` sentinel of the `Iterator` contract, not by an error.
//!
//! ## Performance
//! - `next`: O(1) amortized (each node is pushed and popped exactly once)
//! - iterator space: O(tree height)

use crate::ds::arena::{NodeArena, NodeId};

#[derive(Debug)]
struct TreeNode<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Binary tree that owns its nodes in an arena and exposes them by
/// [`NodeId`].
///
/// Build by setting a root and attaching children; there is no removal.
/// An empty tree (no root set) iterates as an empty sequence.
///
/// # Example
///
/// ```
/// use structkit::tree::BinaryTree;
///
/// let mut tree = BinaryTree::new();
/// let root = tree.set_root(2);
/// tree.add_left(root, 1);
/// tree.add_right(root, 3);
///
/// let in_order: Vec<i32> = tree.in_order().copied().collect();
/// assert_eq!(in_order, vec![1, 2, 3]);
/// ```
#[derive(Debug, Default)]
pub struct BinaryTree<T> {
    arena: NodeArena<TreeNode<T>>,
    root: Option<NodeId>,
}

impl<T> BinaryTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the root id, if a root has been set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Sets the root node, returning its id.
    ///
    /// Calling this on a non-empty tree replaces the whole tree: the old
    /// nodes are dropped.
    pub fn set_root(&mut self, value: T) -> NodeId {
        self.arena.clear();
        let id = self.arena.insert(TreeNode {
            value,
            left: None,
            right: None,
        });
        self.root = Some(id);
        id
    }

    /// Attaches a new left child under `parent`, returning the child's id.
    ///
    /// Returns `None` if `parent` is not a node of this tree or already has
    /// a left child.
    pub fn add_left(&mut self, parent: NodeId, value: T) -> Option<NodeId> {
        if self.arena.get(parent)?.left.is_some() {
            return None;
        }
        let child = self.arena.insert(TreeNode {
            value,
            left: None,
            right: None,
        });
        if let Some(node) = self.arena.get_mut(parent) {
            node.left = Some(child);
        }
        Some(child)
    }

    /// Attaches a new right child under `parent`, returning the child's id.
    ///
    /// Returns `None` if `parent` is not a node of this tree or already has
    /// a right child.
    pub fn add_right(&mut self, parent: NodeId, value: T) -> Option<NodeId> {
        if self.arena.get(parent)?.right.is_some() {
            return None;
        }
        let child = self.arena.insert(TreeNode {
            value,
            left: None,
            right: None,
        });
        if let Some(node) = self.arena.get_mut(parent) {
            node.right = Some(child);
        }
        Some(child)
    }

    /// Returns the value stored at `id`, if present.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a resumable in-order iterator over the tree's values.
    ///
    /// The iterator borrows the tree, so the tree cannot be mutated until
    /// the iterator is dropped.
    pub fn in_order(&self) -> InOrderIter<'_, T> {
        let mut iter = InOrderIter {
            tree: self,
            stack: Vec::new(),
        };
        iter.descend_left(self.root);
        iter
    }
}

/// Resumable in-order iterator over a [`BinaryTree`].
///
/// Holds only the ancestors-plus-self chain needed to resume the traversal:
/// O(height) space. Exhaustion is the standard `None` sentinel;
/// [`has_next`](InOrderIter::has_next) reports whether another value
/// remains.
#[derive(Debug)]
pub struct InOrderIter<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<NodeId>,
}

impl<T> InOrderIter<'_, T> {
    /// Returns `true` iff another value remains.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Pushes `from` and its entire chain of left descendants.
    fn descend_left(&mut self, from: Option<NodeId>) {
        let mut current = from;
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.arena.get(id).and_then(|node| node.left);
        }
    }
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.arena.get(id)?;
        self.descend_left(node.right);
        Some(&node.value)
    }
}
