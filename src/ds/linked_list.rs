//! Doubly linked list backed by [`NodeArena`].
//!
//! Stores list nodes in an arena and links them by [`NodeId`], giving stable
//! handles and O(1) relink/move operations without pointer chasing. The
//! arena's always-valid bounds checks replace the sentinel head/tail nodes a
//! raw-pointer list would need.
//!
//! ## Architecture
//!
//! ```text
//!   arena (NodeArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ NodeId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   front ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── back
//!   (oldest)                              (newest)
//! ```
//!
//! ## Performance
//! - `push_back` / `pop_front`: O(1)
//! - `move_to_back` / `remove`: O(1)
//! - `iter`: O(n)

use crate::ds::arena::{NodeArena, NodeId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Doubly linked list whose nodes live in a [`NodeArena`] and are addressed
/// by [`NodeId`].
///
/// Orientation: front = oldest, back = newest. Recency-tracking callers move
/// touched nodes to the back and evict from the front.
#[derive(Debug)]
pub struct LinkedList<T> {
    arena: NodeArena<Node<T>>,
    front: Option<NodeId>,
    back: Option<NodeId>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            front: None,
            back: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            front: None,
            back: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the front (oldest), if any.
    pub fn front(&self) -> Option<&T> {
        self.front
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the id of the front (oldest) node, if any.
    pub fn front_id(&self) -> Option<NodeId> {
        self.front
    }

    /// Returns the value at the back (newest), if any.
    pub fn back(&self) -> Option<&T> {
        self.back
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the id of the back (newest) node, if any.
    pub fn back_id(&self) -> Option<NodeId> {
        self.back
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Appends a new node at the back and returns its id.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let id = self.arena.insert(Node {
            value,
            prev: self.back,
            next: None,
        });
        match self.back {
            Some(back) => {
                if let Some(node) = self.arena.get_mut(back) {
                    node.next = Some(id);
                }
            }
            None => self.front = Some(id),
        }
        self.back = Some(id);
        id
    }

    /// Removes and returns the front (oldest) value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.front?;
        self.remove(id)
    }

    /// Detaches `id` and reattaches it at the back (newest position).
    ///
    /// Returns `false` if `id` is not a node in this list. The node is
    /// relinked, not recreated; its id stays valid.
    pub fn move_to_back(&mut self, id: NodeId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.back == Some(id) {
            return true;
        }
        self.detach(id);
        // Reattach at the back.
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = self.back;
            node.next = None;
        }
        if let Some(back) = self.back {
            if let Some(node) = self.arena.get_mut(back) {
                node.next = Some(id);
            }
        } else {
            self.front = Some(id);
        }
        self.back = Some(id);
        true
    }

    /// Removes the node for `id` and returns its value, or `None` if `id`
    /// is not a node in this list.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.arena.contains(id) {
            return None;
        }
        self.detach(id);
        self.arena.remove(id).map(|node| node.value)
    }

    /// Removes all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.front = None;
        self.back = None;
    }

    /// Iterates values from front (oldest) to back (newest).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.front,
        }
    }

    /// Iterates node ids from front (oldest) to back (newest).
    pub fn iter_ids(&self) -> IdIter<'_, T> {
        IdIter {
            list: self,
            current: self.front,
        }
    }

    /// Unlinks `id` from its neighbors and fixes up front/back. The node
    /// itself stays in the arena with stale links; callers reattach or
    /// remove it immediately.
    fn detach(&mut self, id: NodeId) {
        let (prev, next) = match self.arena.get(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };
        match prev {
            Some(prev_id) => {
                if let Some(node) = self.arena.get_mut(prev_id) {
                    node.next = next;
                }
            }
            None => self.front = next,
        }
        match next {
            Some(next_id) => {
                if let Some(node) = self.arena.get_mut(next_id) {
                    node.prev = prev;
                }
            }
            None => self.back = prev,
        }
    }

    /// Validates the doubly linked structure. Test/debug builds only.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate(&self) {
        let mut seen = 0usize;
        let mut prev: Option<NodeId> = None;
        let mut current = self.front;
        while let Some(id) = current {
            let node = self.arena.get(id).expect("linked node missing from arena");
            assert_eq!(node.prev, prev, "prev link mismatch at {:?}", id);
            prev = Some(id);
            current = node.next;
            seen += 1;
            assert!(seen <= self.arena.len(), "cycle in linked list");
        }
        assert_eq!(seen, self.arena.len(), "list length != arena length");
        assert_eq!(self.back, prev, "back does not match last node");
        // Every link in every live node must point at another live node.
        for (id, node) in self.arena.iter() {
            if let Some(prev_id) = node.prev {
                assert!(self.arena.contains(prev_id), "dangling prev from {:?}", id);
            }
            if let Some(next_id) = node.next {
                assert!(self.arena.contains(next_id), "dangling next from {:?}", id);
            }
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back value iterator over a [`LinkedList`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

/// Front-to-back id iterator over a [`LinkedList`].
#[derive(Debug)]
pub struct IdIter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<NodeId>,
}

impl<T> Iterator for IdIter<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.list.arena.get(id).and_then(|node| node.next);
        Some(id)
    }
}
