//! [Quick Sort]: Lomuto partitioning with a policy-chosen pivot.
//!
//! The chosen pivot is swapped to the end of the range before a Lomuto
//! pass, then keys equal to the pivot are gathered next to it so runs of
//! duplicates drop out of both recursive halves. Only the smaller side is
//! recursed into; the larger side is handled by the loop, which bounds the
//! stack depth at *O*(*log n*) whatever the pivots turn out to be.
//!
//! [Quick Sort]: https://en.wikipedia.org/wiki/Quicksort

use std::cmp::Ordering;

use crate::config::PivotPolicy;

/// Sorts `arr` in ascending order using median-of-three pivots.
///
/// Not stable. *O*(*n log n*) expected time.
///
/// ```
/// use algo_kit::sorting::quick_sort;
///
/// let mut arr = [10, 7, 8, 9, 1, 5];
/// quick_sort(&mut arr);
/// assert_eq!(arr, [1, 5, 7, 8, 9, 10]);
/// ```
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    quick_sort_by(arr, PivotPolicy::default(), T::cmp);
}

/// Quick sort with an explicit pivot policy.
///
/// ```
/// use algo_kit::config::PivotPolicy;
/// use algo_kit::sorting::quick_sort_with;
///
/// let mut arr: Vec<u32> = (0..1000).rev().collect();
/// quick_sort_with(&mut arr, PivotPolicy::Seeded(42));
/// assert!(arr.is_sorted());
/// ```
pub fn quick_sort_with<T: Ord>(arr: &mut [T], policy: PivotPolicy) {
    quick_sort_by(arr, policy, T::cmp);
}

/// Quick sort with an explicit pivot policy and comparator.
pub fn quick_sort_by<T, F>(arr: &mut [T], policy: PivotPolicy, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut picker = PivotPicker::new(policy);
    sort(arr, &mut picker, &mut compare);
}

enum PivotPicker {
    MedianOfThree,
    Seeded { state: u64 },
}

impl PivotPicker {
    fn new(policy: PivotPolicy) -> Self {
        match policy {
            PivotPolicy::MedianOfThree => Self::MedianOfThree,
            PivotPolicy::Seeded(seed) => Self::Seeded { state: seed },
        }
    }

    /// Index of the pivot for `slice`, which has at least two elements.
    fn pick<T, F>(&mut self, slice: &[T], compare: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let last = slice.len() - 1;
        match self {
            Self::MedianOfThree => {
                let mid = last / 2;
                let less = |compare: &mut F, a: usize, b: usize| {
                    compare(&slice[a], &slice[b]) == Ordering::Less
                };
                let (lo, hi) = if less(compare, mid, 0) { (mid, 0) } else { (0, mid) };
                if less(compare, last, lo) {
                    lo
                } else if less(compare, hi, last) {
                    hi
                } else {
                    last
                }
            }
            Self::Seeded { state } => {
                *state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                ((*state >> 33) % slice.len() as u64) as usize
            }
        }
    }
}

fn sort<T, F>(mut slice: &mut [T], picker: &mut PivotPicker, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while slice.len() > 1 {
        let last = slice.len() - 1;
        let pivot = picker.pick(slice, compare);
        slice.swap(pivot, last);

        let mut store = 0;
        for j in 0..last {
            if compare(&slice[j], &slice[last]) == Ordering::Less {
                slice.swap(store, j);
                store += 1;
            }
        }
        slice.swap(store, last);

        // Everything after the pivot is >= it; pull the equal keys forward.
        let mut equal_end = store + 1;
        for j in store + 1..slice.len() {
            if compare(&slice[j], &slice[store]) == Ordering::Equal {
                slice.swap(equal_end, j);
                equal_end += 1;
            }
        }

        let (left, rest) = std::mem::take(&mut slice).split_at_mut(store);
        let right = &mut rest[equal_end - store..];
        if left.len() < right.len() {
            sort(left, picker, compare);
            slice = right;
        } else {
            sort(right, picker, compare);
            slice = left;
        }
    }
}
