#![forbid(unsafe_code)]

use std::fmt;

use crate::{CoreError, CoreResult};

/// Location reference of a recording, as delivered in an inbound record.
///
/// The raw form is an ARN-like path, e.g.
/// `arn:aws:kinesisvideo:us-east-1:111122223333:stream/contact-audio/1600000000`;
/// the stream name sits between the first and the last `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamLocation {
    raw: String,
    name_range: (usize, usize),
}

impl StreamLocation {
    pub fn parse(raw: impl Into<String>) -> CoreResult<Self> {
        let raw = raw.into();
        let first = raw
            .find('/')
            .ok_or_else(|| CoreError::InvalidLocation(raw.clone()))?;
        let last = raw
            .rfind('/')
            .ok_or_else(|| CoreError::InvalidLocation(raw.clone()))?;
        if first == last || first + 1 == last {
            return Err(CoreError::InvalidLocation(raw));
        }
        Ok(Self {
            raw,
            name_range: (first + 1, last),
        })
    }

    /// The embedded stream name.
    #[must_use]
    pub fn stream_name(&self) -> &str {
        &self.raw[self.name_range.0..self.name_range.1]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for StreamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::arn(
        "arn:aws:kinesisvideo:us-east-1:111122223333:stream/contact-audio/1600000000",
        "contact-audio"
    )]
    #[case::nested_name("prefix/a/b/suffix", "a/b")]
    #[test]
    fn extracts_stream_name(#[case] raw: &str, #[case] expected: &str) {
        let loc = StreamLocation::parse(raw).unwrap();
        assert_eq!(loc.stream_name(), expected);
        assert_eq!(loc.as_str(), raw);
    }

    #[rstest]
    #[case::no_slash("no-separators-here")]
    #[case::single_slash("only/one")]
    #[case::empty_name("adjacent//slashes")]
    #[case::empty("")]
    #[test]
    fn rejects_malformed_locations(#[case] raw: &str) {
        assert!(matches!(
            StreamLocation::parse(raw),
            Err(CoreError::InvalidLocation(_))
        ));
    }
}
