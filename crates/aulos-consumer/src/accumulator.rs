#![forbid(unsafe_code)]

use bytes::{Bytes, BytesMut};

use crate::Track;

/// Two append-only byte buffers, one per logical audio track.
///
/// Spans are appended strictly in fragment-arrival order; no reordering, no
/// deduplication. The whole range is held in memory — for very long or
/// unbounded live ranges the caller must chunk externally (known open risk,
/// kept from the original design).
#[derive(Debug, Default)]
pub struct DualTrackAccumulator {
    to_caller: BytesMut,
    from_caller: BytesMut,
}

impl DualTrackAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, track: Track, span: &[u8]) {
        self.buf_mut(track).extend_from_slice(span);
    }

    #[must_use]
    pub fn len(&self, track: Track) -> usize {
        self.buf(track).len()
    }

    #[must_use]
    pub fn is_empty(&self, track: Track) -> bool {
        self.buf(track).is_empty()
    }

    /// Freeze both buffers, in `(to_caller, from_caller)` order.
    ///
    /// Consumes the accumulator; no further mutation is possible.
    #[must_use]
    pub fn finalize(self) -> (Bytes, Bytes) {
        (self.to_caller.freeze(), self.from_caller.freeze())
    }

    fn buf(&self, track: Track) -> &BytesMut {
        match track {
            Track::ToCaller => &self.to_caller,
            Track::FromCaller => &self.from_caller,
        }
    }

    fn buf_mut(&mut self, track: Track) -> &mut BytesMut {
        match track {
            Track::ToCaller => &mut self.to_caller,
            Track::FromCaller => &mut self.from_caller,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn append_preserves_arrival_order() {
        let mut acc = DualTrackAccumulator::new();
        acc.append(Track::FromCaller, b"s1");
        acc.append(Track::FromCaller, b"s2");
        acc.append(Track::FromCaller, b"s3");

        let (to, from) = acc.finalize();
        assert_eq!(&from[..], b"s1s2s3");
        assert!(to.is_empty());
    }

    #[rstest]
    #[case::one_span(&[&b"abcdef"[..]])]
    #[case::two_spans(&[&b"abc"[..], &b"def"[..]])]
    #[case::byte_at_a_time(&[&b"a"[..], &b"b"[..], &b"c"[..], &b"d"[..], &b"e"[..], &b"f"[..]])]
    #[case::uneven(&[&b"ab"[..], &b""[..], &b"cdef"[..]])]
    #[test]
    fn any_split_concatenates_to_the_same_buffer(#[case] spans: &[&[u8]]) {
        let mut acc = DualTrackAccumulator::new();
        for span in spans {
            acc.append(Track::ToCaller, span);
        }
        let (to, _) = acc.finalize();
        assert_eq!(&to[..], b"abcdef");
    }

    #[test]
    fn tracks_are_independent() {
        let mut acc = DualTrackAccumulator::new();
        acc.append(Track::ToCaller, b"prompt");
        acc.append(Track::FromCaller, b"speech");
        assert_eq!(acc.len(Track::ToCaller), 6);
        assert_eq!(acc.len(Track::FromCaller), 6);

        let (to, from) = acc.finalize();
        assert_eq!(&to[..], b"prompt");
        assert_eq!(&from[..], b"speech");
    }

    #[test]
    fn empty_accumulator_finalizes_to_empty_buffers() {
        let (to, from) = DualTrackAccumulator::new().finalize();
        assert!(to.is_empty());
        assert!(from.is_empty());
    }
}
