//! Stack with O(1) access to its running minimum.
//!
//! Keeps a second, compressed history of minimums alongside the value stack:
//! a `(min, count)` pair is pushed only when the minimum strictly improves,
//! and pushing a value equal to the current minimum bumps the top pair's
//! count instead of recording a new entry. The count keeps the history
//! correct when the minimum occurs more than once.
//!
//! ## Architecture
//!
//! ```text
//!   push(5), push(3), push(7), push(3)
//!
//!   values: [5, 3, 7, 3]        mins: [(5, 1), (3, 2)]
//!                                      └ top = current minimum
//! ```
//!
//! ## Performance
//! - `push` / `pop` / `top` / `min`: O(1)

use crate::error::EmptyError;

/// Stack reporting the minimum of its current contents in O(1).
///
/// Element access on an empty stack is misuse and returns
/// [`EmptyError`]; the stack itself is never left corrupted by a failed
/// call.
///
/// # Example
///
/// ```
/// use structkit::stack::MinStack;
///
/// let mut stack = MinStack::new();
/// stack.push(-2);
/// stack.push(0);
/// stack.push(-3);
/// assert_eq!(stack.min(), Ok(&-3));
/// stack.pop().unwrap();
/// assert_eq!(stack.top(), Ok(&0));
/// assert_eq!(stack.min(), Ok(&-2));
/// ```
#[derive(Debug, Default)]
pub struct MinStack<T> {
    values: Vec<T>,
    mins: Vec<(T, usize)>,
}

impl<T> MinStack<T>
where
    T: Ord + Clone,
{
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            mins: Vec::new(),
        }
    }

    /// Returns the number of values on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the stack holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pushes `value`, updating the compressed minimum history.
    pub fn push(&mut self, value: T) {
        let improves = match self.mins.last_mut() {
            Some((min, count)) => {
                if value == *min {
                    *count += 1;
                    false
                } else {
                    // Values above the minimum leave the history untouched.
                    value < *min
                }
            }
            None => true,
        };
        if improves {
            self.mins.push((value.clone(), 1));
        }
        self.values.push(value);
    }

    /// Removes and returns the top value.
    ///
    /// Fails with [`EmptyError`] on an empty stack, leaving it empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        let value = self.values.pop().ok_or(EmptyError)?;
        if let Some((min, count)) = self.mins.last_mut() {
            if value == *min {
                *count -= 1;
                if *count == 0 {
                    self.mins.pop();
                }
            }
        }
        Ok(value)
    }

    /// Returns the top value without removing it.
    pub fn top(&self) -> Result<&T, EmptyError> {
        self.values.last().ok_or(EmptyError)
    }

    /// Returns the minimum of all values currently on the stack.
    pub fn min(&self) -> Result<&T, EmptyError> {
        self.mins.last().map(|(min, _)| min).ok_or(EmptyError)
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.values.clear();
        self.mins.clear();
    }
}
