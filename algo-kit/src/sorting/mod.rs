//! Sorting algorithms.
//!
//! Comparison sorts work in place on `&mut [T]` with `T: Ord`, and each has
//! a `_by` variant taking a comparator. The non-comparison sorts in this
//! module need integer keys or floats in a known range instead.
//!
//! | Sort      | Stable | Time (worst)  | Extra space |
//! |-----------|--------|---------------|-------------|
//! | bubble    | yes    | *O*(*n²*)     | *O*(1)      |
//! | selection | no     | *O*(*n²*)     | *O*(1)      |
//! | insertion | yes    | *O*(*n²*)     | *O*(1)      |
//! | shell     | no     | *O*(*n²*)     | *O*(1)      |
//! | merge     | yes    | *O*(*n log n*)| *O*(*n*)    |
//! | quick     | no     | *O*(*n²*)     | *O*(log *n*)|
//! | heap      | no     | *O*(*n log n*)| *O*(1)      |
//! | counting  | yes    | *O*(*n + k*)  | *O*(*n + k*)|
//! | radix     | yes    | *O*(8*n*)     | *O*(*n*)    |
//! | bucket    | no     | *O*(*n²*)     | *O*(*n*)    |

mod comparison;
mod distribution;
mod heap;
mod merge;
mod quick;

pub use comparison::{
    bubble_sort, bubble_sort_by, insertion_sort, insertion_sort_by, selection_sort,
    selection_sort_by, shell_sort, shell_sort_by,
};
pub use distribution::{
    bucket_sort, bucket_sort_scaled, counting_sort, counting_sort_by_key, radix_sort,
    radix_sort_signed,
};
pub use heap::{heap_sort, heap_sort_by};
pub use merge::{merge_sort, merge_sort_by};
pub use quick::{quick_sort, quick_sort_by, quick_sort_with};
