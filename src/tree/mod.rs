//! Tree structures and traversal.

pub mod binary;

pub use binary::{BinaryTree, InOrderIter};
