//! Stacks with auxiliary per-element bookkeeping.

pub mod min;
pub mod span;

pub use min::MinStack;
pub use span::SpanStack;
