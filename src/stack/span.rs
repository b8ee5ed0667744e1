//! Monotonic stack computing running spans.
//!
//! For each incoming value, the span is the count of consecutive preceding
//! values (including the value itself) that are less than or equal to it.
//! The stack stays strictly decreasing in value from bottom to top: entries
//! covered by a newer, larger value are popped and their spans folded into
//! the newcomer's, so each value is pushed and popped at most once over a
//! whole sequence.
//!
//! ## Architecture
//!
//! ```text
//!   inputs  100   80   60   70   60   75   85
//!   spans     1    1    1    2    1    4    6
//!
//!   after 75: [(100, 1), (80, 1), (75, 4)]   75 absorbed 70's and 60's spans
//!   after 85: [(100, 1), (85, 6)]            85 absorbed 80's and 75's
//! ```
//!
//! ## Performance
//! - `push`: O(1) amortized (total pops over N calls bounded by N)

/// Monotonic stack answering "how many consecutive prior values were ≤ this
/// one" per incoming value.
///
/// No failure modes; any partially ordered value type works.
///
/// # Example
///
/// ```
/// use structkit::stack::SpanStack;
///
/// let mut spans = SpanStack::new();
/// let out: Vec<usize> = [100, 80, 60, 70, 60, 75, 85]
///     .into_iter()
///     .map(|price| spans.push(price))
///     .collect();
/// assert_eq!(out, vec![1, 1, 1, 2, 1, 4, 6]);
/// ```
#[derive(Debug, Default)]
pub struct SpanStack<T> {
    // Strictly decreasing in value from bottom to top.
    stack: Vec<(T, usize)>,
}

impl<T> SpanStack<T>
where
    T: PartialOrd,
{
    /// Creates an empty span stack.
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Returns the number of collapsed entries currently held.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if no value has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Records `value` and returns its span.
    pub fn push(&mut self, value: T) -> usize {
        let mut span = 1;
        while let Some((top, top_span)) = self.stack.pop() {
            if top > value {
                self.stack.push((top, top_span));
                break;
            }
            span += top_span;
        }
        self.stack.push((value, span));
        span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_of(inputs: &[i64]) -> Vec<usize> {
        let mut stack = SpanStack::new();
        inputs.iter().map(|&v| stack.push(v)).collect()
    }

    #[test]
    fn reference_sequence() {
        assert_eq!(
            spans_of(&[100, 80, 60, 70, 60, 75, 85]),
            vec![1, 1, 1, 2, 1, 4, 6]
        );
    }

    #[test]
    fn strictly_decreasing_inputs_always_span_one() {
        assert_eq!(spans_of(&[9, 8, 7, 6, 5]), vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn nondecreasing_inputs_span_their_full_prefix() {
        assert_eq!(spans_of(&[1, 2, 3, 4]), vec![1, 2, 3, 4]);
        // Equal values also count as "less than or equal".
        assert_eq!(spans_of(&[5, 5, 5]), vec![1, 2, 3]);
    }

    #[test]
    fn stack_stays_strictly_decreasing() {
        let mut stack = SpanStack::new();
        for v in [100, 80, 60, 70, 60, 75] {
            stack.push(v);
            let values: Vec<_> = stack.stack.iter().map(|(v, _)| *v).collect();
            assert!(values.windows(2).all(|w| w[0] > w[1]), "{values:?}");
        }
    }

    #[test]
    fn merged_entry_count_shrinks_on_absorption() {
        let mut stack = SpanStack::new();
        stack.push(10);
        stack.push(5);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.push(8), 3); // absorbs 5 and 3
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn never_empty_after_first_push() {
        let mut stack = SpanStack::new();
        assert!(stack.is_empty());
        // Absorption folds entries but always retains the absorbing one.
        for v in [10, 20, 30] {
            stack.push(v);
            assert!(!stack.is_empty());
            assert_eq!(stack.len(), 1);
        }
    }

    #[test]
    fn works_with_floats() {
        let mut stack = SpanStack::new();
        assert_eq!(stack.push(1.5), 1);
        assert_eq!(stack.push(1.5), 2);
        assert_eq!(stack.push(0.5), 1);
        assert_eq!(stack.push(2.0), 4);
    }

    #[test]
    fn span_matches_brute_force_lookback() {
        let inputs = [31, 41, 59, 26, 53, 58, 97, 93, 23, 84];
        let spans = spans_of(&inputs);
        for (i, &span) in spans.iter().enumerate() {
            let mut expected = 0;
            for j in (0..=i).rev() {
                if inputs[j] <= inputs[i] {
                    expected += 1;
                } else {
                    break;
                }
            }
            assert_eq!(span, expected, "at index {i}");
        }
    }
}
