//! Stable sorting of token sequences.
//!
//! Sorting is generic over anything that can be viewed as `&str`, so callers
//! keep their own element type. Tokens the comparator considers equal keep
//! their input order in both directions: descending sorts with the negated
//! comparator rather than reversing an ascending result.

use tracing::debug;

use crate::compare::{Comparator, Direction, Variant};

impl Comparator {
    /// Returns a new, ordered copy of `tokens`.
    pub fn sort<T>(&self, tokens: &[T]) -> Vec<T>
    where
        T: AsRef<str> + Clone,
    {
        let mut sorted = tokens.to_vec();
        self.sort_in_place(&mut sorted);
        sorted
    }

    pub fn sort_in_place<T>(&self, tokens: &mut [T])
    where
        T: AsRef<str>,
    {
        debug!(
            comparator = self.name(),
            direction = %self.direction,
            len = tokens.len(),
            "sorting tokens"
        );
        tokens.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// `true` when every adjacent pair is in order.
    pub fn is_sorted<T>(&self, tokens: &[T]) -> bool
    where
        T: AsRef<str>,
    {
        tokens
            .windows(2)
            .all(|pair| self.compare(pair[0].as_ref(), pair[1].as_ref()).is_le())
    }
}

pub fn sort_tokens<T>(tokens: &[T], variant: Variant, direction: Direction) -> Vec<T>
where
    T: AsRef<str> + Clone,
{
    Comparator::new(variant, direction).sort(tokens)
}

/// Ascending and descending orderings of the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BothDirections<T> {
    pub ascending: Vec<T>,
    pub descending: Vec<T>,
}

pub fn sort_both<T>(tokens: &[T], comparator: Comparator) -> BothDirections<T>
where
    T: AsRef<str> + Clone,
{
    BothDirections {
        ascending: comparator.with_direction(Direction::Ascending).sort(tokens),
        descending: comparator.with_direction(Direction::Descending).sort(tokens),
    }
}
