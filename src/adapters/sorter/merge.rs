use crate::domain::sorter::Sorter;

/// Top-down merge sort, O(n log n) for every input
pub struct MergeSorter;

impl Sorter for MergeSorter {
    fn sort(&self, values: Vec<i64>) -> Vec<i64> {
        merge_sort(values)
    }

    fn name(&self) -> &str {
        "merge"
    }
}

/// Sort an owned vector by splitting it in half and merging the sorted halves.
pub fn merge_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }
    let right = values.split_off(values.len() / 2);
    merge(merge_sort(values), merge_sort(right))
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        if take_left {
            out.extend(left.next());
        } else {
            out.extend(right.next());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_mixed_signs() {
        let sorted = MergeSorter.sort(vec![5, 14, -9, 62, -1]);
        assert_eq!(sorted, vec![-9, -1, 5, 14, 62]);
    }

    #[test]
    fn test_merge_sort_generic_strings() {
        let names = vec!["b.txt".to_string(), "a.txt".to_string(), "c.txt".to_string()];
        assert_eq!(merge_sort(names), vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_merge_keeps_all_elements() {
        let sorted = merge_sort(vec![3, 1, 2, 3, 1]);
        assert_eq!(sorted, vec![1, 1, 2, 3, 3]);
    }
}
