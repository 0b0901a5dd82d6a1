//! Sequence DP: longest common subsequence, edit distance and longest
//! increasing subsequence.
//!
//! Everything here works on slices; pass `s.as_bytes()` or a
//! `Vec<char>` for strings.

use super::dp_cache::{DpCache, DpProblem, Vec2DBackend};

/// Prefix-length table for LCS: `table[i][j]` is the LCS length of
/// `a[..i]` and `b[..j]`.
fn lcs_table<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<usize>> {
    tracing::trace!(rows = a.len() + 1, cols = b.len() + 1, "lcs table");
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table
}

/// Length of the longest common subsequence of `a` and `b`.
///
/// *O*(*n* · *m*) time.
///
/// ```
/// use algo_kit::dynamic::lcs_length;
///
/// assert_eq!(lcs_length(b"ABCBDAB", b"BDCABA"), 4);
/// ```
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    lcs_table(a, b)[a.len()][b.len()]
}

/// One longest common subsequence of `a` and `b`, recovered by walking the
/// table back from the bottom-right corner.
pub fn lcs<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let table = lcs_table(a, b);
    let (mut i, mut j) = (a.len(), b.len());
    let mut out = Vec::with_capacity(table[i][j]);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    out.reverse();
    out
}

struct LcsProblem<'a, T> {
    a: &'a [T],
    b: &'a [T],
}

impl<T: PartialEq> DpProblem<(usize, usize), usize> for LcsProblem<'_, T> {
    fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
        let (i, j) = *pos;
        if i == 0 || j == 0 {
            vec![]
        } else if self.a[i - 1] == self.b[j - 1] {
            vec![(i - 1, j - 1)]
        } else {
            vec![(i - 1, j), (i, j - 1)]
        }
    }

    fn compute(&self, pos: &(usize, usize), deps: Vec<usize>) -> usize {
        let (i, j) = *pos;
        if i == 0 || j == 0 {
            0
        } else if self.a[i - 1] == self.b[j - 1] {
            deps[0] + 1
        } else {
            deps[0].max(deps[1])
        }
    }
}

/// Top-down LCS length on [`DpCache`]. Only the states reachable from
/// `(n, m)` are evaluated; recursion depth is at most `n + m`.
pub fn lcs_memoized<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let cache = DpCache::with_problem(
        Vec2DBackend::new(a.len() + 1, b.len() + 1),
        LcsProblem { a, b },
    );
    cache.get(&(a.len(), b.len()))
}

/// Levenshtein distance: the minimum number of single-element insertions,
/// deletions and substitutions turning `a` into `b`.
///
/// Keeps two rows of the table. *O*(*n* · *m*) time, *O*(*m*) space.
///
/// ```
/// use algo_kit::dynamic::edit_distance;
///
/// assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
/// ```
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j].min(curr[j - 1]).min(prev[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

struct EditProblem<'a, T> {
    a: &'a [T],
    b: &'a [T],
}

impl<T: PartialEq> DpProblem<(usize, usize), usize> for EditProblem<'_, T> {
    fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
        let (i, j) = *pos;
        if i == 0 || j == 0 {
            vec![]
        } else if self.a[i - 1] == self.b[j - 1] {
            vec![(i - 1, j - 1)]
        } else {
            vec![(i - 1, j), (i, j - 1), (i - 1, j - 1)]
        }
    }

    fn compute(&self, pos: &(usize, usize), deps: Vec<usize>) -> usize {
        match *pos {
            (0, j) => j,
            (i, 0) => i,
            _ if deps.len() == 1 => deps[0],
            _ => 1 + deps.into_iter().min().unwrap_or(0),
        }
    }
}

/// Top-down edit distance on [`DpCache`].
pub fn edit_distance_memoized<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let cache = DpCache::with_problem(
        Vec2DBackend::new(a.len() + 1, b.len() + 1),
        EditProblem { a, b },
    );
    cache.get(&(a.len(), b.len()))
}

/// Per-index LIS lengths and predecessor links, quadratic DP.
fn lis_links<T: Ord>(arr: &[T]) -> (Vec<usize>, Vec<Option<usize>>) {
    let mut len = vec![1usize; arr.len()];
    let mut prev = vec![None; arr.len()];
    for i in 0..arr.len() {
        for j in 0..i {
            if arr[j] < arr[i] && len[j] + 1 > len[i] {
                len[i] = len[j] + 1;
                prev[i] = Some(j);
            }
        }
    }
    (len, prev)
}

/// Length of the longest strictly increasing subsequence.
///
/// `dp[i] = 1 + max(dp[j] : j < i, arr[j] < arr[i])`. *O*(*n²*) time.
pub fn lis_length<T: Ord>(arr: &[T]) -> usize {
    lis_links(arr).0.into_iter().max().unwrap_or(0)
}

/// One longest strictly increasing subsequence; the earliest-ending one
/// when several exist.
///
/// ```
/// use algo_kit::dynamic::lis;
///
/// assert_eq!(lis(&[10, 9, 2, 5, 3, 7, 101, 18]), vec![2, 5, 7, 101]);
/// ```
pub fn lis<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    let (len, prev) = lis_links(arr);
    let Some(mut end) = (0..arr.len()).max_by_key(|&i| (len[i], std::cmp::Reverse(i))) else {
        return Vec::new();
    };

    let mut out = vec![arr[end].clone()];
    while let Some(p) = prev[end] {
        out.push(arr[p].clone());
        end = p;
    }
    out.reverse();
    out
}

/// Patience-sorting LIS length in *O*(*n log n*).
///
/// `tails[k]` holds the smallest possible tail of an increasing
/// subsequence of length `k + 1`. Gives the length only.
pub fn lis_length_fast<T: Ord>(arr: &[T]) -> usize {
    let mut tails: Vec<&T> = Vec::new();
    for x in arr {
        let pos = tails.partition_point(|&tail| tail < x);
        if pos == tails.len() {
            tails.push(x);
        } else {
            tails[pos] = x;
        }
    }
    tails.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_reference_case() {
        assert_eq!(lcs_length(b"ABCBDAB", b"BDCABA"), 4);
        assert_eq!(lcs_memoized(b"ABCBDAB", b"BDCABA"), 4);

        let common = lcs(b"ABCBDAB", b"BDCABA");
        assert_eq!(common.len(), 4);
        assert_eq!(lcs_length(&common, b"ABCBDAB"), 4);
        assert_eq!(lcs_length(&common, b"BDCABA"), 4);
    }

    #[test]
    fn test_lcs_empty_and_disjoint() {
        assert_eq!(lcs_length::<u8>(b"", b"abc"), 0);
        assert_eq!(lcs_length(b"abc", b"xyz"), 0);
        assert!(lcs(b"abc", b"xyz").is_empty());
        assert_eq!(lcs_memoized::<u8>(b"", b""), 0);
    }

    #[test]
    fn test_lcs_on_chars() {
        let a: Vec<char> = "AGGTAB".chars().collect();
        let b: Vec<char> = "GXTXAYB".chars().collect();
        assert_eq!(lcs(&a, &b).into_iter().collect::<String>(), "GTAB");
    }

    #[test]
    fn test_edit_distance_reference_case() {
        assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
        assert_eq!(edit_distance_memoized(b"kitten", b"sitting"), 3);
    }

    #[test]
    fn test_edit_distance_edges() {
        assert_eq!(edit_distance(b"", b"abc"), 3);
        assert_eq!(edit_distance(b"abc", b""), 3);
        assert_eq!(edit_distance(b"same", b"same"), 0);
        assert_eq!(edit_distance(b"sunday", b"saturday"), 3);
        assert_eq!(edit_distance_memoized(b"sunday", b"saturday"), 3);
        assert_eq!(edit_distance_memoized(b"", b"ab"), 2);
    }

    #[test]
    fn test_lis() {
        let arr = [10, 9, 2, 5, 3, 7, 101, 18];
        assert_eq!(lis_length(&arr), 4);
        assert_eq!(lis_length_fast(&arr), 4);
        assert_eq!(lis(&arr), vec![2, 5, 7, 101]);
    }

    #[test]
    fn test_lis_is_strict() {
        let arr = [3, 3, 3, 3];
        assert_eq!(lis_length(&arr), 1);
        assert_eq!(lis_length_fast(&arr), 1);
        assert_eq!(lis(&arr), vec![3]);

        let empty: [i32; 0] = [];
        assert_eq!(lis_length(&empty), 0);
        assert_eq!(lis_length_fast(&empty), 0);
        assert!(lis(&empty).is_empty());
    }

    #[test]
    fn test_lis_descending_input() {
        let arr: Vec<i32> = (0..20).rev().collect();
        assert_eq!(lis_length(&arr), 1);
        assert_eq!(lis_length_fast(&arr), 1);
    }
}
