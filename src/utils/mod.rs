//! Integer math and formatting helpers shared by the engines

use std::fmt::Display;

/// Returns true if `x` is an exact power of two.
///
/// Zero is excluded: the bit trick alone would accept it.
pub fn is_power_of_two(x: usize) -> bool {
    x != 0 && x & (x - 1) == 0
}

/// Computes the floor of the base-2 logarithm of `x`.
///
/// # Panics
///
/// Panics if `x` is zero.
pub fn log2i(x: usize) -> usize {
    assert!(x != 0, "log2 of zero is undefined");
    (usize::BITS - 1 - x.leading_zeros()) as usize
}

/// Joins a sequence of displayable values into a single delimited string
pub fn join<T: Display>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_power_of_two() {
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(2));
        assert!(is_power_of_two(8));
        assert!(is_power_of_two(1024));

        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(5));
        assert!(!is_power_of_two(6));
        assert!(!is_power_of_two(1023));
    }

    #[test]
    fn test_log2i() {
        assert_eq!(log2i(1), 0);
        assert_eq!(log2i(2), 1);
        assert_eq!(log2i(8), 3);
        assert_eq!(log2i(9), 3);
        assert_eq!(log2i(1024), 10);
    }

    #[test]
    #[should_panic(expected = "log2 of zero is undefined")]
    fn test_log2i_zero() {
        log2i(0);
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[1, 2, 3], ", "), "1, 2, 3");
        assert_eq!(join(&[7], ", "), "7");
        assert_eq!(join::<i32>(&[], ", "), "");
        assert_eq!(join(&[-1, 0, 1], ","), "-1,0,1");
    }
}
