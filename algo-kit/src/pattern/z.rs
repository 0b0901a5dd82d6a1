//! [Z-algorithm]: match lengths against the string's own prefix.
//!
//! [Z-algorithm]: https://cp-algorithms.com/string/z-function.html

/// Z-array of `s`: `z[i]` is the length of the longest common prefix of `s`
/// and `s[i..]`. By convention `z[0] = s.len()`. *O*(*n*) time.
///
/// ```
/// use algo_kit::pattern::z_array;
///
/// assert_eq!(z_array(b"aabxaab"), vec![7, 1, 0, 0, 3, 1, 0]);
/// ```
pub fn z_array<T: Eq>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    let mut z = vec![0; n];
    if n == 0 {
        return z;
    }
    z[0] = n;

    // [left, right) is the rightmost window known to match a prefix.
    let (mut left, mut right) = (0, 0);
    for i in 1..n {
        if i < right {
            z[i] = z[i - left].min(right - i);
        }
        while i + z[i] < n && s[z[i]] == s[i + z[i]] {
            z[i] += 1;
        }
        if i + z[i] > right {
            left = i;
            right = i + z[i];
        }
    }
    z
}

/// All start positions of `pattern` in `text`, read off the Z-array of
/// `pattern`, a separator and `text`.
///
/// The separator is `None` over `Option<&T>` symbols, so it can never equal
/// a real symbol. *O*(*n* + *m*) time and space.
pub fn z_search<T: Eq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    if m == 0 || m > text.len() {
        return Vec::new();
    }

    let joined: Vec<Option<&T>> = pattern
        .iter()
        .map(Some)
        .chain(std::iter::once(None))
        .chain(text.iter().map(Some))
        .collect();

    z_array(&joined)
        .into_iter()
        .enumerate()
        .skip(m + 1)
        .filter(|&(_, len)| len >= m)
        .map(|(i, _)| i - m - 1)
        .collect()
}
