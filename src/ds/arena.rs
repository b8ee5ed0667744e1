//! Slot arena with stable ids.
//!
//! Backing storage for structures that need stable handles to their nodes
//! without raw pointers: nodes live in a `Vec`, callers address them by
//! [`NodeId`], and freed slots are chained into an intrusive free list so
//! insertion after removal reuses space instead of growing the vector.
//!
//! ## Performance
//! - `insert` / `remove` / `get` / `get_mut`: O(1)
//! - `iter`: O(slots), including freed ones

/// Stable handle to a node in a [`NodeArena`].
///
/// Ids are only meaningful for the arena that issued them. Removing a node
/// invalidates its id; a later insert may reissue it for a different value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Free { next_free: Option<usize> },
}

/// Arena of nodes addressed by [`NodeId`], with slot reuse.
#[derive(Debug)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty arena with reserved slot capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value` and returns a stable id for it.
    ///
    /// Reuses the most recently freed slot when one is available.
    pub fn insert(&mut self, value: T) -> NodeId {
        let idx = match self.free_head {
            Some(idx) => {
                self.free_head = match self.slots[idx] {
                    Slot::Free { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
                };
                self.slots[idx] = Slot::Occupied(value);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            }
        };
        self.len += 1;
        NodeId(idx)
    }

    /// Removes the node for `id` and returns its value, or `None` if the id
    /// is stale.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if matches!(slot, Slot::Free { .. }) {
            return None;
        }
        let freed = std::mem::replace(
            slot,
            Slot::Free {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        self.len -= 1;
        match freed {
            Slot::Occupied(value) => Some(value),
            Slot::Free { .. } => None,
        }
    }

    /// Returns a reference to the value for `id`, if present.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value for `id`, if present.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.0), Some(Slot::Occupied(_)))
    }

    /// Returns the number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all nodes and frees all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }

    /// Iterates over live nodes in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| match slot {
            Slot::Occupied(value) => Some((NodeId(idx), value)),
            Slot::Free { .. } => None,
        })
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
