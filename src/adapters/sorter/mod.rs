//! Comparison sort adapters
//!
//! Each algorithm is available as a generic in-place or by-value function and as a
//! [`Sorter`](crate::domain::sorter::Sorter) implementation over `i64`.

mod bubble;
mod insertion;
mod merge;
mod quick;

pub use bubble::{BubbleSorter, bubble_sort};
pub use insertion::{InsertionSorter, insertion_sort};
pub use merge::{MergeSorter, merge_sort};
pub use quick::{QuickSorter, quick_sort};
