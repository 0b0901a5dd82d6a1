//! [Merge Sort]: top-down divide and conquer.
//!
//! [Merge Sort]: https://en.wikipedia.org/wiki/Merge_sort

use std::cmp::Ordering;

/// Sorts `arr` in ascending order.
///
/// Stable. Takes *O*(*n log n*) time and one scratch buffer of *n*
/// elements, allocated once and shared by every merge.
///
/// ```
/// use algo_kit::sorting::merge_sort;
///
/// let mut arr = [38, 27, 43, 3, 9, 82, 10];
/// merge_sort(&mut arr);
/// assert_eq!(arr, [3, 9, 10, 27, 38, 43, 82]);
/// ```
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    merge_sort_by(arr, T::cmp);
}

/// [`merge_sort`] with a caller-supplied comparator.
pub fn merge_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.len() <= 1 {
        return;
    }
    let mut scratch = arr.to_vec();
    sort_range(arr, &mut scratch, &mut compare);
}

fn sort_range<T, F>(arr: &mut [T], scratch: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = arr.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    {
        let (left, right) = arr.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        sort_range(left, scratch_left, compare);
        sort_range(right, scratch_right, compare);
    }

    // Already in order across the split.
    if compare(&arr[mid - 1], &arr[mid]) != Ordering::Greater {
        return;
    }

    scratch[..len].clone_from_slice(arr);
    let (left, right) = scratch[..len].split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in arr.iter_mut() {
        // Ties take from the left run, which keeps the sort stable.
        let take_left = j >= right.len()
            || (i < left.len() && compare(&left[i], &right[j]) != Ordering::Greater);
        if take_left {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            slot.clone_from(&right[j]);
            j += 1;
        }
    }
}
