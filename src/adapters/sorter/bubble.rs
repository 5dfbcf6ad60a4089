use crate::domain::sorter::Sorter;

/// Bubble sort with early exit once a pass makes no swaps
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    fn sort(&self, mut values: Vec<i64>) -> Vec<i64> {
        bubble_sort(&mut values);
        values
    }

    fn name(&self) -> &str {
        "bubble"
    }
}

pub fn bubble_sort<T: Ord>(values: &mut [T]) {
    let n = values.len();
    for pass in 0..n {
        let mut swapped = false;
        // The largest `pass` elements are already in their final place
        for j in 0..n - pass - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_sort_all_positive() {
        assert_eq!(
            BubbleSorter.sort(vec![62, 14, 5, 1000, 3]),
            vec![3, 5, 14, 62, 1000]
        );
    }

    #[test]
    fn test_bubble_sort_empty() {
        assert!(BubbleSorter.sort(vec![]).is_empty());
    }
}
