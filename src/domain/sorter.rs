/// Comparison sort over distinct integers (implemented by adapters::sorter)
///
/// Implementations must not delegate to the standard library's slice sorts.
/// Input values are distinct, so stability does not matter.
pub trait Sorter: Send + Sync {
    /// Return `values` in ascending order.
    fn sort(&self, values: Vec<i64>) -> Vec<i64>;

    /// Short algorithm name used in reports and logs
    fn name(&self) -> &str;
}

/// True when every adjacent pair is strictly increasing.
pub fn is_strictly_ascending(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_ascending() {
        assert!(is_strictly_ascending(&[]));
        assert!(is_strictly_ascending(&[4]));
        assert!(is_strictly_ascending(&[-9, -1, 5, 14, 62]));
        assert!(!is_strictly_ascending(&[1, 1]));
        assert!(!is_strictly_ascending(&[2, 1]));
    }
}
