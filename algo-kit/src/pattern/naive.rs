/// Checks every alignment of `pattern` against `text`.
///
/// *O*(*n* · *m*) time. Overlapping matches are all reported.
///
/// ```
/// use algo_kit::pattern::naive_search;
///
/// assert_eq!(naive_search(b"AABAACAADAABAABA", b"AABA"), vec![0, 9, 12]);
/// ```
pub fn naive_search<T: Eq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(naive_search(b"aaaa", b"aa"), vec![0, 1, 2]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(naive_search(b"abc", b"").is_empty());
        assert!(naive_search(b"ab", b"abc").is_empty());
        assert!(naive_search::<u8>(b"", b"a").is_empty());
        assert_eq!(naive_search(b"abc", b"abc"), vec![0]);
    }
}
