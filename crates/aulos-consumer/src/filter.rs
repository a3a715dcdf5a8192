#![forbid(unsafe_code)]

use aulos_core::FragmentNumber;

/// Where a fragment sits relative to the configured upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    InRange,
    PastEnd,
}

/// Classify a fragment number against an inclusive upper bound.
///
/// `number == end` is still in range. There is no lower-bound check: the
/// transport's start selector guarantees fragments before the start never
/// arrive. The comparison is full-precision integer, never floating point.
#[must_use]
pub fn classify(number: FragmentNumber, end: FragmentNumber) -> Classification {
    if number > end {
        Classification::PastEnd
    } else {
        Classification::InRange
    }
}
