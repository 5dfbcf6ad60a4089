use crate::domain::sorter::Sorter;

/// In-place quicksort with median-of-three pivot selection
pub struct QuickSorter;

impl Sorter for QuickSorter {
    fn sort(&self, mut values: Vec<i64>) -> Vec<i64> {
        quick_sort(&mut values);
        values
    }

    fn name(&self) -> &str {
        "quick"
    }
}

/// Sort `values` in place.
///
/// Recurses only into the smaller partition and loops on the larger one, so the
/// stack depth stays O(log n) even for adversarial inputs.
pub fn quick_sort<T: Ord>(values: &mut [T]) {
    let mut slice = values;
    while slice.len() > 1 {
        let current = slice;
        let p = partition(current);
        let (left, rest) = current.split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort(left);
            slice = right;
        } else {
            quick_sort(right);
            slice = left;
        }
    }
}

/// Lomuto partition around the median of first, middle and last elements.
/// Returns the pivot's final index.
fn partition<T: Ord>(values: &mut [T]) -> usize {
    let last = values.len() - 1;
    let mid = last / 2;

    // Order first/mid/last, then park the median at the end as pivot
    if values[mid] < values[0] {
        values.swap(mid, 0);
    }
    if values[last] < values[0] {
        values.swap(last, 0);
    }
    if values[last] < values[mid] {
        values.swap(last, mid);
    }
    values.swap(mid, last);

    let mut store = 0;
    for i in 0..last {
        if values[i] < values[last] {
            values.swap(i, store);
            store += 1;
        }
    }
    values.swap(store, last);
    store
}
