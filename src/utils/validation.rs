//! Input parsing helpers

use crate::constants::PROBLEM_CODE_PREFIX_LEN;

/// Numeric problem id embedded in a problem code
///
/// The first [`PROBLEM_CODE_PREFIX_LEN`] characters are a fixed prefix; the
/// remainder parses as an integer. Malformed codes fall back to 0 rather than
/// being rejected.
pub fn problem_numeric_id(problem_code: &str) -> i32 {
    problem_code
        .get(PROBLEM_CODE_PREFIX_LEN..)
        .and_then(|suffix| suffix.parse::<i32>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_suffix() {
        assert_eq!(problem_numeric_id("SIH25010"), 25010);
        assert_eq!(problem_numeric_id("PRB00042"), 42);
    }

    #[test]
    fn test_fallback_to_zero() {
        assert_eq!(problem_numeric_id("SIHxx"), 0);
        assert_eq!(problem_numeric_id("SIH"), 0);
        assert_eq!(problem_numeric_id("AB"), 0);
        assert_eq!(problem_numeric_id(""), 0);
    }

    #[test]
    fn test_signed_suffix() {
        assert_eq!(problem_numeric_id("SIH-7"), -7);
    }
}
