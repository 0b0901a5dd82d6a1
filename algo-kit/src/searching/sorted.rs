//! A slice proven to be sorted.

use std::ops::Deref;

use crate::error::AlgoError;

/// A borrowed slice whose elements are known to be in ascending order.
///
/// Searches that rely on ordering take a `SortedSlice`, so the *O*(*n*)
/// check is paid once at construction rather than on every lookup, and an
/// unsorted input is rejected instead of producing a silently wrong answer.
///
/// # Example
///
/// ```rust
/// use algo_kit::searching::{binary_search, SortedSlice};
///
/// let data = [2, 3, 5, 7, 11];
/// let sorted = SortedSlice::new(&data).unwrap();
/// assert_eq!(binary_search(&sorted, &7), Some(3));
///
/// assert!(SortedSlice::new(&[3, 1, 2]).is_err());
/// ```
#[derive(Debug)]
pub struct SortedSlice<'a, T> {
    items: &'a [T],
}

impl<'a, T: Ord> SortedSlice<'a, T> {
    /// Wraps `items` after checking that they are non-decreasing.
    pub fn new(items: &'a [T]) -> Result<Self, AlgoError> {
        match items.windows(2).position(|pair| pair[1] < pair[0]) {
            Some(i) => {
                tracing::warn!(index = i + 1, "rejecting unsorted input");
                Err(AlgoError::Unsorted { index: i + 1 })
            }
            None => Ok(Self { items }),
        }
    }
}

impl<'a, T> SortedSlice<'a, T> {
    /// Wraps `items` without checking. The caller guarantees the order;
    /// searches over an unsorted slice return unspecified results.
    pub fn new_unchecked(items: &'a [T]) -> Self {
        Self { items }
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Clone for SortedSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortedSlice<'_, T> {}

impl<T> Deref for SortedSlice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}
