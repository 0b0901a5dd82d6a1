//! [Boyer-Moore]: right-to-left comparison with bad-character and
//! good-suffix shifts.
//!
//! [Boyer-Moore]: https://en.wikipedia.org/wiki/Boyer%E2%80%93Moore_string-search_algorithm

use std::collections::HashMap;
use std::hash::Hash;

/// Shift table for the strong good-suffix rule.
///
/// `shift[j]` is how far to slide the pattern when `pattern[j..]` matched
/// and `pattern[j - 1]` did not (`shift[0]` after a full match).
fn good_suffix_shifts<T: Eq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![0; m + 1];
    // border[i]: start of the widest border of pattern[i..]
    let mut border = vec![0; m + 1];

    let (mut i, mut j) = (m, m + 1);
    border[i] = j;
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    // Suffixes with no reoccurrence fall back to the widest border of the
    // whole pattern.
    let mut j = border[0];
    for (i, slot) in shift.iter_mut().enumerate() {
        if *slot == 0 {
            *slot = j;
        }
        if i == j {
            j = border[j];
        }
    }
    shift
}

/// All start positions of `pattern` in `text`.
///
/// Each alignment is compared right to left; on a mismatch the pattern
/// slides by the larger of the bad-character and good-suffix shifts, at
/// least one. Sublinear on typical text, *O*(*n* · *m*) in the worst case.
///
/// ```
/// use algo_kit::pattern::boyer_moore;
///
/// assert_eq!(boyer_moore(b"ABAAABCD", b"ABC"), vec![4]);
/// ```
pub fn boyer_moore<T: Eq + Hash>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return Vec::new();
    }

    let last: HashMap<&T, usize> = pattern.iter().enumerate().map(|(i, x)| (x, i)).collect();
    let good_suffix = good_suffix_shifts(pattern);

    let mut matches = Vec::new();
    let mut s = 0;
    while s + m <= n {
        // j counts the pattern elements still unmatched
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
        }

        if j == 0 {
            matches.push(s);
            s += good_suffix[0].max(1);
            continue;
        }

        let bad_char = match last.get(&text[s + j - 1]) {
            Some(&l) if l < j - 1 => j - 1 - l,
            Some(_) => 1,
            None => j,
        };
        s += bad_char.max(good_suffix[j]).max(1);
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_suffix_table() {
        assert_eq!(good_suffix_shifts(b"ABBABAB"), vec![5, 5, 5, 5, 2, 5, 4, 1]);
    }

    #[test]
    fn test_matches() {
        assert_eq!(boyer_moore(b"THIS IS A TEST TEXT", b"TEST"), vec![10]);
        assert_eq!(boyer_moore(b"AABAACAADAABAABA", b"AABA"), vec![0, 9, 12]);
        assert_eq!(boyer_moore(b"aaaaaa", b"aaa"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_match_and_degenerate() {
        assert!(boyer_moore(b"abcdefg", b"xyz").is_empty());
        assert!(boyer_moore(b"abc", b"").is_empty());
        assert!(boyer_moore(b"ab", b"abc").is_empty());
        assert_eq!(boyer_moore(b"x", b"x"), vec![0]);
    }
}
