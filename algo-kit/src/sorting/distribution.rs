//! Non-comparison sorts: counting, radix and bucket sort.
//!
//! These trade the *O*(*n log n*) comparison lower bound for assumptions
//! about the keys: a bounded integer range, fixed-width integers, or floats
//! spread roughly evenly over `[0, 1)`.

use crate::error::AlgoError;

/// [Counting Sort] over keys in `0..=max_key`.
///
/// Stable by prefix-sum placement. *O*(*n* + *k*) time and space.
///
/// ```
/// use algo_kit::sorting::counting_sort;
///
/// assert_eq!(counting_sort(&[4, 2, 2, 8, 3, 3, 1], 8).unwrap(), vec![1, 2, 2, 3, 3, 4, 8]);
/// assert!(counting_sort(&[4, 9], 8).is_err());
/// ```
///
/// [Counting Sort]: https://en.wikipedia.org/wiki/Counting_sort
pub fn counting_sort(arr: &[usize], max_key: usize) -> Result<Vec<usize>, AlgoError> {
    counting_sort_by_key(arr, max_key, |&key| key)
}

/// Stable counting sort of arbitrary items by an integer key in
/// `0..=max_key`.
///
/// Returns [`AlgoError::KeyOutOfRange`] for the first key above `max_key`,
/// before anything is moved.
pub fn counting_sort_by_key<T, K>(arr: &[T], max_key: usize, key: K) -> Result<Vec<T>, AlgoError>
where
    T: Clone,
    K: Fn(&T) -> usize,
{
    let keys: Vec<usize> = arr.iter().map(&key).collect();
    if let Some(&bad) = keys.iter().find(|&&k| k > max_key) {
        tracing::warn!(key = bad, max = max_key, "counting sort key out of range");
        return Err(AlgoError::KeyOutOfRange {
            key: bad,
            max: max_key,
        });
    }

    let mut counts = vec![0usize; max_key + 1];
    for &k in &keys {
        counts[k] += 1;
    }
    // counts[k] becomes the first output slot for key k.
    let mut next = 0;
    for count in &mut counts {
        let c = *count;
        *count = next;
        next += c;
    }

    let mut order = vec![0usize; arr.len()];
    for (i, &k) in keys.iter().enumerate() {
        order[counts[k]] = i;
        counts[k] += 1;
    }
    Ok(order.into_iter().map(|i| arr[i].clone()).collect())
}

/// [Radix Sort], least significant digit first, one byte per pass.
///
/// Each of the eight passes is a stable counting sort on one byte; passes
/// over a byte that is identical in every key are skipped.
///
/// [Radix Sort]: https://en.wikipedia.org/wiki/Radix_sort
pub fn radix_sort(arr: &mut [u64]) {
    radix_sort_by_key(arr, |&x| x);
}

/// Radix sort for signed integers, by flipping the sign bit so that the
/// unsigned byte order matches the signed order.
pub fn radix_sort_signed(arr: &mut [i64]) {
    radix_sort_by_key(arr, |&x| (x as u64) ^ (1 << 63));
}

fn radix_sort_by_key<T: Copy>(arr: &mut [T], key: impl Fn(&T) -> u64) {
    if arr.len() <= 1 {
        return;
    }
    let mut buffer = arr.to_vec();
    for shift in (0..64).step_by(8) {
        let digit = |x: &T| ((key(x) >> shift) & 0xFF) as usize;

        let mut counts = [0usize; 256];
        for x in arr.iter() {
            counts[digit(x)] += 1;
        }
        if counts.iter().any(|&c| c == arr.len()) {
            continue;
        }

        let mut next = 0;
        for count in &mut counts {
            let c = *count;
            *count = next;
            next += c;
        }
        for x in arr.iter() {
            let d = digit(x);
            buffer[counts[d]] = *x;
            counts[d] += 1;
        }
        arr.copy_from_slice(&buffer);
    }
}

/// [Bucket Sort] for keys in `[0, 1)`.
///
/// Scatters into `n` buckets, sorts each bucket with insertion sort and
/// concatenates. *O*(*n*) expected time for uniformly distributed keys.
/// Rejects NaN, infinities and anything outside `[0, 1)` with
/// [`AlgoError::InvalidBucketKey`].
///
/// [Bucket Sort]: https://en.wikipedia.org/wiki/Bucket_sort
pub fn bucket_sort(arr: &mut [f64]) -> Result<(), AlgoError> {
    if let Some(&bad) = arr.iter().find(|x| !(0.0..1.0).contains(*x)) {
        tracing::warn!(key = bad, "bucket sort key outside [0, 1)");
        return Err(AlgoError::InvalidBucketKey(bad));
    }
    scatter_sorted(arr, |x| x);
    Ok(())
}

/// Bucket sort for arbitrary finite floats, rescaled into `[0, 1)` by the
/// observed minimum and maximum. Non-finite keys are rejected.
pub fn bucket_sort_scaled(arr: &mut [f64]) -> Result<(), AlgoError> {
    if let Some(&bad) = arr.iter().find(|x| !x.is_finite()) {
        tracing::warn!(key = bad, "bucket sort key is not finite");
        return Err(AlgoError::InvalidBucketKey(bad));
    }
    let min = arr.iter().copied().fold(f64::INFINITY, f64::min);
    let max = arr.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if !(span > 0.0 && span.is_finite()) {
        // Empty, all equal, or a range too wide to rescale.
        arr.sort_by(f64::total_cmp);
        return Ok(());
    }
    scatter_sorted(arr, |x| ((x - min) / span).min(1.0 - f64::EPSILON));
    Ok(())
}

fn scatter_sorted(arr: &mut [f64], unit: impl Fn(f64) -> f64) {
    let n = arr.len();
    if n <= 1 {
        return;
    }
    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); n];
    for &x in arr.iter() {
        let index = ((unit(x) * n as f64) as usize).min(n - 1);
        buckets[index].push(x);
    }

    let mut next = 0;
    for mut bucket in buckets {
        super::insertion_sort_by(&mut bucket, f64::total_cmp);
        for x in bucket {
            arr[next] = x;
            next += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_sort() {
        assert_eq!(counting_sort(&[], 0).unwrap(), Vec::<usize>::new());
        assert_eq!(
            counting_sort(&[3, 0, 3, 1, 0], 3).unwrap(),
            vec![0, 0, 1, 3, 3]
        );
    }

    #[test]
    fn test_counting_sort_rejects_out_of_range() {
        assert_eq!(
            counting_sort(&[1, 5, 2], 4),
            Err(AlgoError::KeyOutOfRange { key: 5, max: 4 })
        );
    }

    #[test]
    fn test_counting_sort_by_key_is_stable() {
        let people = [("bo", 3), ("al", 1), ("cy", 3), ("di", 0), ("ed", 1)];
        let sorted = counting_sort_by_key(&people, 3, |p| p.1).unwrap();
        assert_eq!(
            sorted,
            vec![("di", 0), ("al", 1), ("ed", 1), ("bo", 3), ("cy", 3)]
        );
    }

    #[test]
    fn test_radix_sort() {
        let mut arr = [170, 45, 75, 90, 802, 24, 2, 66, u64::MAX, 0, 1 << 40];
        radix_sort(&mut arr);
        assert_eq!(arr, [0, 2, 24, 45, 66, 75, 90, 170, 802, 1 << 40, u64::MAX]);
    }

    #[test]
    fn test_radix_sort_signed() {
        let mut arr = [5, -3, i64::MIN, 0, i64::MAX, -1, 17];
        radix_sort_signed(&mut arr);
        assert_eq!(arr, [i64::MIN, -3, -1, 0, 5, 17, i64::MAX]);
    }

    #[test]
    fn test_bucket_sort() {
        let mut arr = [0.897, 0.565, 0.656, 0.1234, 0.665, 0.3434, 0.0, 0.999];
        bucket_sort(&mut arr).unwrap();
        assert_eq!(arr, [0.0, 0.1234, 0.3434, 0.565, 0.656, 0.665, 0.897, 0.999]);
    }

    #[test]
    fn test_bucket_sort_keeps_every_key_with_empty_buckets() {
        let mut arr = [0.9, 0.1, 0.5, 0.3];
        bucket_sort(&mut arr).unwrap();
        assert_eq!(arr, [0.1, 0.3, 0.5, 0.9]);

        let mut clustered = [0.01, 0.02, 0.03, 0.99, 0.98];
        bucket_sort(&mut clustered).unwrap();
        assert_eq!(clustered, [0.01, 0.02, 0.03, 0.98, 0.99]);

        let mut scaled = [100.0, -1.0, -1.0, 50.0];
        bucket_sort_scaled(&mut scaled).unwrap();
        assert_eq!(scaled, [-1.0, -1.0, 50.0, 100.0]);
    }

    #[test]
    fn test_bucket_sort_rejects_bad_keys() {
        assert_eq!(
            bucket_sort(&mut [0.5, 1.0]),
            Err(AlgoError::InvalidBucketKey(1.0))
        );
        assert!(bucket_sort(&mut [f64::NAN]).is_err());
        assert!(bucket_sort(&mut [-0.1]).is_err());
    }

    #[test]
    fn test_bucket_sort_scaled() {
        let mut arr = [42.0, -7.5, 3.25, 1e6, 0.0, -7.5];
        bucket_sort_scaled(&mut arr).unwrap();
        assert_eq!(arr, [-7.5, -7.5, 0.0, 3.25, 42.0, 1e6]);

        let mut same = [2.0; 4];
        bucket_sort_scaled(&mut same).unwrap();
        assert_eq!(same, [2.0; 4]);

        assert!(bucket_sort_scaled(&mut [1.0, f64::INFINITY]).is_err());
    }
}
