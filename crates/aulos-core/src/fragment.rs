#![forbid(unsafe_code)]

use std::{fmt, str::FromStr};

use crate::{CoreError, CoreResult};

/// A stream fragment's sequence number.
///
/// Fragment numbers arrive as decimal strings and can exceed the exact-integer
/// range of `f64` (and of `u64`), so they are stored as `u128` and must never
/// pass through a floating-point type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FragmentNumber(u128);

impl FragmentNumber {
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u128 {
        self.0
    }
}

impl FromStr for FragmentNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidFragmentNumber("empty string".into()));
        }
        trimmed
            .parse::<u128>()
            .map(FragmentNumber)
            .map_err(|_| CoreError::InvalidFragmentNumber(trimmed.to_string()))
    }
}

impl fmt::Display for FragmentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u128> for FragmentNumber {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::small("42")]
    #[case::zero("0")]
    #[case::beyond_f64("913438523331814323926820626195")]
    #[test]
    fn parses_and_round_trips_decimal_strings(#[case] input: &str) {
        let n: FragmentNumber = input.parse().unwrap();
        // Display round-trips without loss.
        assert_eq!(n.to_string(), input);
    }

    #[test]
    fn parses_to_exact_value() {
        let n: FragmentNumber = "42".parse().unwrap();
        assert_eq!(n.value(), 42);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::negative("-1")]
    #[case::scientific("9.134e49")]
    #[case::garbage("abc")]
    #[test]
    fn rejects_non_decimal(#[case] input: &str) {
        assert!(input.parse::<FragmentNumber>().is_err());
    }

    #[test]
    fn ordering_is_full_precision() {
        // Adjacent values beyond f64's 2^53 exact-integer range stay distinct.
        let base: u128 = (1 << 60) + 1;
        let a = FragmentNumber::new(base);
        let b = FragmentNumber::new(base + 1);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let n: FragmentNumber = " 17 ".parse().unwrap();
        assert_eq!(n, FragmentNumber::new(17));
    }
}
