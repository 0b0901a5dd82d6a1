//! [Linear Search]: sequentially checks each element until a match is found
//! or the whole list has been searched.
//!
//! [Linear Search]: https://en.wikipedia.org/wiki/Linear_search

/// Returns the index of the first element equal to `target`, or [`None`].
///
/// Works on unordered input.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time.
///
/// # Examples
///
/// ```
/// use algo_kit::searching::linear_search;
///
/// let arr = [11, 4, 30, 110, 4];
///
/// assert_eq!(linear_search(&arr, &4), Some(1));
/// assert_eq!(linear_search(&arr, &40), None);
/// ```
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|elem| elem == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_in_middle() {
        let arr = [1, 3, 5, 7, 9];
        assert_eq!(linear_search(&arr, &5), Some(2));
    }

    #[test]
    fn test_not_found() {
        let arr = [1, 2, 3, 4, 5];
        assert_eq!(linear_search(&arr, &6), None);
    }

    #[test]
    fn test_empty_array() {
        let arr: [i32; 0] = [];
        assert_eq!(linear_search(&arr, &1), None);
    }

    #[test]
    fn test_duplicates_return_first_occurrence() {
        let arr = [9, 4, 2, 4, 4];
        assert_eq!(linear_search(&arr, &4), Some(1));
    }
}
