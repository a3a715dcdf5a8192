#![forbid(unsafe_code)]

//! Scripted collaborators for tests.

use std::time::Duration;

use async_trait::async_trait;
use aulos_core::FragmentNumber;
use bytes::Bytes;
use futures::{StreamExt, stream};
use parking_lot::Mutex;

use crate::{
    ConsumerError, ConsumerResult, FragmentDescriptor, FragmentEvent, FragmentSource,
    FragmentStream, FragmentTags, StartSelector, Track, TrackDemux,
};

/// A pre-parsed fragment with scripted tag and track behavior.
#[derive(Clone, Debug, Default)]
pub struct MockFragment {
    number: Option<FragmentNumber>,
    to_caller: Option<Bytes>,
    from_caller: Option<Bytes>,
    fail_tracks: bool,
}

impl MockFragment {
    #[must_use]
    pub fn new(number: u128) -> Self {
        Self {
            number: Some(FragmentNumber::new(number)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_to(mut self, span: impl Into<Bytes>) -> Self {
        self.to_caller = Some(span.into());
        self
    }

    #[must_use]
    pub fn with_from(mut self, span: impl Into<Bytes>) -> Self {
        self.from_caller = Some(span.into());
        self
    }

    /// Make tag extraction fail for this fragment.
    #[must_use]
    pub fn corrupt_tags(mut self) -> Self {
        self.number = None;
        self
    }

    /// Make track extraction fail for this fragment.
    #[must_use]
    pub fn corrupt_tracks(mut self) -> Self {
        self.fail_tracks = true;
        self
    }
}

/// Demux over [`MockFragment`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockDemux;

impl TrackDemux<MockFragment> for MockDemux {
    fn fragment_tags(&self, fragment: &MockFragment) -> ConsumerResult<FragmentTags> {
        let number = fragment
            .number
            .ok_or_else(|| ConsumerError::Demux("missing fragment number tag".into()))?;
        let mut tags = FragmentTags::new(number);
        tags.entries
            .insert("FRAGMENT_NUMBER".into(), number.to_string());
        Ok(tags)
    }

    fn track_data(&self, fragment: &MockFragment, track: Track) -> ConsumerResult<Option<Bytes>> {
        if fragment.fail_tracks {
            return Err(ConsumerError::Demux("corrupt track payload".into()));
        }
        Ok(match track {
            Track::ToCaller => fragment.to_caller.clone(),
            Track::FromCaller => fragment.from_caller.clone(),
        })
    }
}

/// Wrap a fragment in an arrival event with a zero receive duration.
#[must_use]
pub fn arrived(fragment: MockFragment) -> FragmentEvent<MockFragment> {
    FragmentEvent::Arrived(FragmentDescriptor::new(fragment, Duration::ZERO))
}

/// A [`FragmentSource`] that replays one scripted event sequence per stream
/// name and records which streams were opened.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    scripts: Mutex<Vec<(String, Vec<FragmentEvent<MockFragment>>)>>,
    opened: Mutex<Vec<(String, StartSelector)>>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the event sequence delivered for `stream_name`.
    pub fn script(&self, stream_name: impl Into<String>, events: Vec<FragmentEvent<MockFragment>>) {
        self.scripts.lock().push((stream_name.into(), events));
    }

    /// Stream names and start selectors seen by `open`, in call order.
    #[must_use]
    pub fn opened(&self) -> Vec<(String, StartSelector)> {
        self.opened.lock().clone()
    }
}

#[async_trait]
impl FragmentSource for ScriptedSource {
    type Fragment = MockFragment;

    async fn open(
        &self,
        stream_name: &str,
        start: StartSelector,
    ) -> ConsumerResult<FragmentStream<MockFragment>> {
        self.opened.lock().push((stream_name.to_string(), start));

        let mut scripts = self.scripts.lock();
        let position = scripts
            .iter()
            .position(|(name, _)| name == stream_name)
            .ok_or_else(|| {
                ConsumerError::Transport(format!("no such stream: {stream_name}"))
            })?;
        let (_, events) = scripts.remove(position);
        Ok(stream::iter(events).boxed())
    }
}
