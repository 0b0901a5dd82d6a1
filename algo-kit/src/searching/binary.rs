//! [Binary Search]: finds the position of a target value within a sorted
//! array by halving the search interval.
//!
//! [Binary Search]: https://en.wikipedia.org/wiki/Binary_search

use std::cmp::Ordering;

use super::sorted::SortedSlice;

/// Returns the index of an element equal to `target`, or [`None`].
///
/// Among duplicates, which matching index is returned is unspecified.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time.
///
/// # Examples
///
/// ```
/// use algo_kit::searching::{binary_search, SortedSlice};
///
/// let arr = [4, 10, 12, 13, 20, 50, 66];
/// let arr = SortedSlice::new(&arr).unwrap();
///
/// assert_eq!(binary_search(&arr, &4), Some(0));
/// assert_eq!(binary_search(&arr, &40), None);
/// ```
pub fn binary_search<T: Ord>(arr: &SortedSlice<'_, T>, target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}

/// Recursive formulation of [`binary_search`]; recursion depth is
/// *O*(*log n*).
pub fn binary_search_recursive<T: Ord>(arr: &SortedSlice<'_, T>, target: &T) -> Option<usize> {
    fn search<T: Ord>(arr: &[T], target: &T, lo: usize, hi: usize) -> Option<usize> {
        if lo >= hi {
            return None;
        }
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => Some(mid),
            Ordering::Less => search(arr, target, mid + 1, hi),
            Ordering::Greater => search(arr, target, lo, mid),
        }
    }

    search(arr, target, 0, arr.len())
}

/// Index of the first element not less than `target` (`arr.len()` if none).
pub fn lower_bound<T: Ord>(arr: &SortedSlice<'_, T>, target: &T) -> usize {
    arr.partition_point(|elem| elem < target)
}

/// Index of the first element greater than `target` (`arr.len()` if none).
pub fn upper_bound<T: Ord>(arr: &SortedSlice<'_, T>, target: &T) -> usize {
    arr.partition_point(|elem| elem <= target)
}
