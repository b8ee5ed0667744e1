//! Low-level storage primitives shared by the user-facing structures.

pub mod arena;
pub mod linked_list;

pub use arena::{NodeArena, NodeId};
pub use linked_list::LinkedList;
