//! Sorted-array searches that differ from binary search only in where they
//! probe: ternary, jump, exponential, Fibonacci and interpolation search.
//!
//! All of them take a [`SortedSlice`] and return the index of some element
//! equal to the target, or [`None`]. Which index is returned among
//! duplicates is unspecified.

use std::cmp::Ordering;

use super::binary::binary_search;
use super::sorted::SortedSlice;

/// Splits the interval into thirds with two probes per step.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time, with more comparisons than binary search.
pub fn ternary_search<T: Ord>(arr: &SortedSlice<'_, T>, target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let third = (hi - lo) / 3;
        let m1 = lo + third;
        let m2 = hi - 1 - third;

        if arr[m1] == *target {
            return Some(m1);
        }
        if arr[m2] == *target {
            return Some(m2);
        }

        if *target < arr[m1] {
            hi = m1;
        } else if *target > arr[m2] {
            lo = m2 + 1;
        } else {
            lo = m1 + 1;
            hi = m2;
        }
    }

    None
}

/// Jumps ahead in blocks of `⌊√n⌋` until the block that may hold the
/// target, then scans that block linearly.
///
/// # Time Complexity
///
/// Takes *O*(*√n*) time.
pub fn jump_search<T: Ord>(arr: &SortedSlice<'_, T>, target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    let step = n.isqrt().max(1);

    let mut prev = 0;
    let mut next = step.min(n);
    while arr[next - 1] < *target {
        prev = next;
        if prev >= n {
            return None;
        }
        next = (next + step).min(n);
    }

    for (i, elem) in arr[prev..next].iter().enumerate() {
        match elem.cmp(target) {
            Ordering::Equal => return Some(prev + i),
            Ordering::Greater => return None,
            Ordering::Less => {}
        }
    }
    None
}

/// Doubles a bound until it passes the target, then binary-searches the
/// last doubling interval.
///
/// # Time Complexity
///
/// Takes *O*(*log i*) time, where `i` is the position of the target, which
/// makes it attractive for unbounded or very long inputs.
pub fn exponential_search<T: Ord>(arr: &SortedSlice<'_, T>, target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    if arr[0] == *target {
        return Some(0);
    }

    let mut bound = 1;
    while bound < n && arr[bound] < *target {
        bound *= 2;
    }

    let lo = bound / 2;
    let hi = (bound + 1).min(n);
    let window = SortedSlice::new_unchecked(&arr[lo..hi]);
    binary_search(&window, target).map(|i| lo + i)
}

/// Narrows the interval using consecutive Fibonacci numbers, so probes
/// need only addition and subtraction.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time.
pub fn fibonacci_search<T: Ord>(arr: &SortedSlice<'_, T>, target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }

    // Smallest Fibonacci number >= n, with its two predecessors.
    let (mut fib2, mut fib1) = (0usize, 1usize);
    let mut fib = fib2 + fib1;
    while fib < n {
        fib2 = fib1;
        fib1 = fib;
        fib = fib2 + fib1;
    }

    // Count of leading elements already ruled out.
    let mut offset = 0;
    while fib > 1 {
        let i = (offset + fib2).min(n) - 1;
        match arr[i].cmp(target) {
            Ordering::Less => {
                fib = fib1;
                fib1 = fib2;
                fib2 = fib - fib1;
                offset = i + 1;
            }
            Ordering::Greater => {
                fib = fib2;
                fib1 -= fib2;
                fib2 = fib - fib1;
            }
            Ordering::Equal => return Some(i),
        }
    }

    (fib1 == 1 && offset < n && arr[offset] == *target).then_some(offset)
}

/// Probes where the target would sit if keys were evenly spread between
/// the interval's end points.
///
/// # Time Complexity
///
/// *O*(*log log n*) on uniformly distributed keys, degrading to *O*(*n*) on
/// adversarial distributions.
pub fn interpolation_search<T>(arr: &SortedSlice<'_, T>, target: &T) -> Option<usize>
where
    T: Copy + Ord + Into<i64>,
{
    if arr.is_empty() {
        return None;
    }
    let key = |v: T| {
        let v: i64 = v.into();
        i128::from(v)
    };
    let t = key(*target);
    let key = |i: usize| key(arr[i]);

    let (mut lo, mut hi) = (0, arr.len() - 1);
    while lo <= hi && t >= key(lo) && t <= key(hi) {
        let (lo_key, hi_key) = (key(lo), key(hi));
        if lo_key == hi_key {
            return (lo_key == t).then_some(lo);
        }

        let span = (hi - lo) as i128;
        let pos = lo + ((t - lo_key) * span / (hi_key - lo_key)) as usize;
        match key(pos).cmp(&t) {
            Ordering::Equal => return Some(pos),
            Ordering::Less => lo = pos + 1,
            Ordering::Greater => match pos.checked_sub(1) {
                Some(p) => hi = p,
                None => break,
            },
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searching::linear_search;

    type Search = fn(&SortedSlice<'_, i32>, &i32) -> Option<usize>;

    const SEARCHES: [(&str, Search); 5] = [
        ("ternary", ternary_search),
        ("jump", jump_search),
        ("exponential", exponential_search),
        ("fibonacci", fibonacci_search),
        ("interpolation", interpolation_search),
    ];

    #[test]
    fn test_every_position_is_found() {
        for n in 0..40 {
            let arr: Vec<i32> = (0..n).map(|x| x * 2 + 1).collect();
            let sorted = SortedSlice::new(&arr).unwrap();
            for (name, search) in SEARCHES {
                for (i, v) in arr.iter().enumerate() {
                    assert_eq!(search(&sorted, v), Some(i), "{name} n={n} v={v}");
                }
            }
        }
    }

    #[test]
    fn test_absent_values_are_not_found() {
        let arr: Vec<i32> = (0..25).map(|x| x * 2).collect();
        let sorted = SortedSlice::new(&arr).unwrap();
        for (name, search) in SEARCHES {
            for v in [-3, 1, 7, 25, 47, 49, 100] {
                assert_eq!(search(&sorted, &v), None, "{name} v={v}");
            }
        }
    }

    #[test]
    fn test_duplicates_hit_a_matching_index() {
        let arr = [1, 3, 3, 3, 3, 8, 9, 9];
        let sorted = SortedSlice::new(&arr).unwrap();
        for (name, search) in SEARCHES {
            for v in [3, 9] {
                let i = search(&sorted, &v).unwrap_or_else(|| panic!("{name} missed {v}"));
                assert_eq!(arr[i], v, "{name}");
            }
        }
    }

    #[test]
    fn test_skewed_keys_for_interpolation() {
        let arr: Vec<i32> = (0..30).map(|x| x * x * x).collect();
        let sorted = SortedSlice::new(&arr).unwrap();
        for v in [0, 1, 8, 13, 24_389, 24_390] {
            assert_eq!(interpolation_search(&sorted, &v), linear_search(&arr, &v));
        }
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let arr = [i64::MIN, -1, 0, i64::MAX];
        let sorted = SortedSlice::new(&arr).unwrap();
        assert_eq!(interpolation_search(&sorted, &i64::MAX), Some(3));
        assert_eq!(interpolation_search(&sorted, &i64::MIN), Some(0));
        assert_eq!(interpolation_search(&sorted, &5), None);
    }
}
