#![forbid(unsafe_code)]

use aulos_core::ContactId;
use chrono::{DateTime, Utc};

/// Destination key for one artifact: `{base_path}{YYYY}/{MM}/{DD}/{id}.wav`.
///
/// The date is the invocation's current UTC date, passed in by the caller so
/// a batch spanning midnight stays consistent per record, not per batch.
/// `base_path` is prepended verbatim; include a trailing `/` if one is
/// wanted.
#[must_use]
pub fn artifact_key(base_path: &str, contact_id: &ContactId, now: DateTime<Utc>) -> String {
    format!(
        "{base_path}{}/{contact_id}.wav",
        now.format("%Y/%m/%d")
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn contact(id: &str) -> ContactId {
        ContactId::new(id).unwrap()
    }

    #[test]
    fn formats_zero_padded_utc_date() {
        let now = Utc.with_ymd_and_hms(2026, 3, 7, 23, 59, 59).unwrap();
        assert_eq!(
            artifact_key("recordings/", &contact("abc-123"), now),
            "recordings/2026/03/07/abc-123.wav"
        );
    }

    #[test]
    fn empty_base_path_starts_with_year() {
        let now = Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(
            artifact_key("", &contact("c"), now),
            "2026/12/31/c.wav"
        );
    }
}
