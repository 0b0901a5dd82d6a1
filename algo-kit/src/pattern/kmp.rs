//! [Knuth-Morris-Pratt]: linear-time search driven by the prefix function.
//!
//! [Knuth-Morris-Pratt]: https://en.wikipedia.org/wiki/Knuth%E2%80%93Morris%E2%80%93Pratt_algorithm

/// Prefix function (the "lps" table): `pi[i]` is the length of the longest
/// proper prefix of `s[..=i]` that is also a suffix of it. *O*(*m*) time.
///
/// ```
/// use algo_kit::pattern::prefix_function;
///
/// assert_eq!(prefix_function(b"AAACAAAA"), vec![0, 1, 2, 0, 1, 2, 3, 3]);
/// ```
pub fn prefix_function<T: Eq>(s: &[T]) -> Vec<usize> {
    let mut pi = vec![0; s.len()];
    for i in 1..s.len() {
        let mut k = pi[i - 1];
        while k > 0 && s[i] != s[k] {
            k = pi[k - 1];
        }
        if s[i] == s[k] {
            k += 1;
        }
        pi[i] = k;
    }
    pi
}

/// All start positions of `pattern` in `text`.
///
/// On a mismatch the pattern falls back along the prefix function instead
/// of re-reading text, so each text element is examined a bounded number
/// of times. *O*(*n* + *m*) time.
///
/// ```
/// use algo_kit::pattern::kmp_search;
///
/// assert_eq!(kmp_search(b"ABABDABACDABABCABAB", b"ABABCABAB"), vec![10]);
/// ```
pub fn kmp_search<T: Eq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    if m == 0 || m > text.len() {
        return Vec::new();
    }

    let pi = prefix_function(pattern);
    let mut matches = Vec::new();
    let mut matched = 0;
    for (i, x) in text.iter().enumerate() {
        while matched > 0 && *x != pattern[matched] {
            matched = pi[matched - 1];
        }
        if *x == pattern[matched] {
            matched += 1;
        }
        if matched == m {
            matches.push(i + 1 - m);
            matched = pi[m - 1];
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_function() {
        assert_eq!(prefix_function(b"ABABCABAB"), vec![0, 0, 1, 2, 0, 1, 2, 3, 4]);
        assert_eq!(prefix_function(b"aaaa"), vec![0, 1, 2, 3]);
        assert!(prefix_function::<u8>(b"").is_empty());
    }

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(kmp_search(b"aaaaa", b"aa"), vec![0, 1, 2, 3]);
        assert_eq!(kmp_search(b"abababab", b"abab"), vec![0, 2, 4]);
    }

    #[test]
    fn test_no_match() {
        assert!(kmp_search(b"abcdef", b"xyz").is_empty());
        assert!(kmp_search(b"abc", b"").is_empty());
    }
}
