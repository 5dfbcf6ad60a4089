use crate::domain::sorter::Sorter;

/// Insertion sort. Quadratic, but cheap for a few hundred values.
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    fn sort(&self, mut values: Vec<i64>) -> Vec<i64> {
        insertion_sort(&mut values);
        values
    }

    fn name(&self) -> &str {
        "insertion"
    }
}

pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j] < values[j - 1] {
            values.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_sort_all_negative() {
        assert_eq!(
            InsertionSorter.sort(vec![-3, -100, -1, -50]),
            vec![-100, -50, -3, -1]
        );
    }

    #[test]
    fn test_insertion_sort_single() {
        assert_eq!(InsertionSorter.sort(vec![7]), vec![7]);
    }
}
