//! The quadratic and sub-quadratic comparison sorts: bubble, selection,
//! insertion and Shell sort.

use std::cmp::Ordering;

/// [Bubble Sort]: repeatedly swaps adjacent out-of-order pairs.
///
/// Stable. Stops early once a full pass makes no swap, so already sorted
/// input takes *O*(*n*) time; the worst case is *O*(*n^2*).
///
/// ```
/// use algo_kit::sorting::bubble_sort;
///
/// let mut arr = [10, 323, 11, 35, 76, 2, 11, 393, 14];
/// bubble_sort(&mut arr);
/// assert_eq!(arr, [2, 10, 11, 11, 14, 35, 76, 323, 393]);
/// ```
///
/// [Bubble Sort]: https://en.wikipedia.org/wiki/Bubble_sort
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    bubble_sort_by(arr, T::cmp);
}

/// [`bubble_sort`] with a caller-supplied comparator.
pub fn bubble_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut unsorted = arr.len();
    while unsorted > 1 {
        // Everything past the last swap is already in place.
        let mut last_swap = 0;
        for j in 1..unsorted {
            if compare(&arr[j - 1], &arr[j]) == Ordering::Greater {
                arr.swap(j - 1, j);
                last_swap = j;
            }
        }
        unsorted = last_swap;
    }
}

/// [Selection Sort]: repeatedly moves the minimum of the unsorted suffix to
/// its front.
///
/// Not stable. Always *O*(*n^2*) comparisons but at most *n* swaps.
///
/// [Selection Sort]: https://en.wikipedia.org/wiki/Selection_sort
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    selection_sort_by(arr, T::cmp);
}

/// [`selection_sort`] with a caller-supplied comparator.
pub fn selection_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 0..arr.len() {
        let mut min = i;
        for j in i + 1..arr.len() {
            if compare(&arr[j], &arr[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
        }
    }
}

/// [Insertion Sort]: grows a sorted prefix one element at a time.
///
/// Stable. *O*(*n^2*) in the worst case, *O*(*n*) on sorted input.
///
/// [Insertion Sort]: https://en.wikipedia.org/wiki/Insertion_sort
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    insertion_sort_by(arr, T::cmp);
}

/// [`insertion_sort`] with a caller-supplied comparator.
pub fn insertion_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && compare(&arr[j - 1], &arr[j]) == Ordering::Greater {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// [Shell Sort]: gapped insertion sort with gaps `n/2, n/4, ..., 1`.
///
/// Not stable. Worst case *O*(*n^2*) with this gap sequence, typically much
/// faster than plain insertion sort.
///
/// [Shell Sort]: https://en.wikipedia.org/wiki/Shellsort
pub fn shell_sort<T: Ord>(arr: &mut [T]) {
    shell_sort_by(arr, T::cmp);
}

/// [`shell_sort`] with a caller-supplied comparator.
pub fn shell_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut gap = arr.len() / 2;
    while gap > 0 {
        for i in gap..arr.len() {
            let mut j = i;
            while j >= gap && compare(&arr[j - gap], &arr[j]) == Ordering::Greater {
                arr.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Sort = fn(&mut [i32]);

    const SORTS: [(&str, Sort); 4] = [
        ("bubble", bubble_sort),
        ("selection", selection_sort),
        ("insertion", insertion_sort),
        ("shell", shell_sort),
    ];

    #[test]
    fn test_sorts_agree_with_std() {
        let inputs: [&[i32]; 6] = [
            &[],
            &[1],
            &[2, 1],
            &[5, 3, 3, 1],
            &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
            &[10, 323, 11, 35, 76, 2, 11, 393, 14, -4, 0, 11],
        ];
        for (name, sort) in SORTS {
            for input in inputs {
                let mut actual = input.to_vec();
                let mut expected = input.to_vec();
                sort(&mut actual);
                expected.sort();
                assert_eq!(actual, expected, "{name} on {input:?}");
            }
        }
    }

    #[test]
    fn test_insertion_and_bubble_are_stable() {
        // (key, tag): the two 3s must keep their relative order
        let input = [(5, 'a'), (3, 'a'), (3, 'b'), (1, 'a')];

        let mut arr = input;
        insertion_sort_by(&mut arr, |a, b| a.0.cmp(&b.0));
        assert_eq!(arr, [(1, 'a'), (3, 'a'), (3, 'b'), (5, 'a')]);

        let mut arr = input;
        bubble_sort_by(&mut arr, |a, b| a.0.cmp(&b.0));
        assert_eq!(arr, [(1, 'a'), (3, 'a'), (3, 'b'), (5, 'a')]);
    }

    #[test]
    fn test_descending_comparator() {
        let mut arr = [3, 1, 4, 1, 5, 9, 2, 6];
        shell_sort_by(&mut arr, |a, b| b.cmp(a));
        assert_eq!(arr, [9, 6, 5, 4, 3, 2, 1, 1]);

        let mut arr = [3, 1, 4, 1, 5];
        selection_sort_by(&mut arr, |a, b| b.cmp(a));
        assert_eq!(arr, [5, 4, 3, 1, 1]);
    }

    #[test]
    fn test_bubble_early_exit_on_sorted_input() {
        let mut calls = 0;
        let mut arr: Vec<i32> = (0..100).collect();
        bubble_sort_by(&mut arr, |a, b| {
            calls += 1;
            a.cmp(b)
        });
        assert_eq!(calls, 99);
    }
}
