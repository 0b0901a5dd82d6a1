//! [Heap Sort]: in-place sort built on the sift helpers of
//! [`algo_collections::heap`].
//!
//! [Heap Sort]: https://en.wikipedia.org/wiki/Heapsort

use std::cmp::Ordering;

use algo_collections::heap::{heapify_by, sift_down_by};

/// Sorts `arr` in ascending order.
///
/// The slice is first arranged into a max-heap in linear time; the root is
/// then repeatedly swapped behind a shrinking heap prefix and the new root
/// sifted down. Not stable. *O*(*n log n*) time, *O*(1) extra space.
///
/// ```
/// use algo_kit::sorting::heap_sort;
///
/// let mut arr = [12, 11, 13, 5, 6, 7];
/// heap_sort(&mut arr);
/// assert_eq!(arr, [5, 6, 7, 11, 12, 13]);
/// ```
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    heap_sort_by(arr, T::cmp);
}

/// [`heap_sort`] with a caller-supplied comparator.
pub fn heap_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut dominates = |a: &T, b: &T| compare(a, b) == Ordering::Greater;
    heapify_by(arr, &mut dominates);
    for end in (1..arr.len()).rev() {
        arr.swap(0, end);
        sift_down_by(&mut arr[..end], 0, &mut dominates);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_sort() {
        let mut arr = [3, -2, 7, 7, 0, 15, -9, 4];
        heap_sort(&mut arr);
        assert_eq!(arr, [-9, -2, 0, 3, 4, 7, 7, 15]);
    }

    #[test]
    fn test_heap_sort_edge_cases() {
        let mut empty: [i32; 0] = [];
        heap_sort(&mut empty);

        let mut one = [1];
        heap_sort(&mut one);
        assert_eq!(one, [1]);

        let mut same = [4; 9];
        heap_sort(&mut same);
        assert_eq!(same, [4; 9]);
    }

    #[test]
    fn test_heap_sort_by_key() {
        let mut words = ["kiwi", "fig", "banana", "apple"];
        heap_sort_by(&mut words, |a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
        assert_eq!(words, ["fig", "kiwi", "apple", "banana"]);
    }
}
