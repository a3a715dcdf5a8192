#![forbid(unsafe_code)]

use std::{collections::BTreeMap, sync::Arc};

use aulos_core::FragmentNumber;
use bytes::Bytes;

use crate::ConsumerResult;

/// One of the two logical audio tracks multiplexed within a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    /// Audio played to the caller (prompts, agent side).
    ToCaller,
    /// Audio captured from the caller.
    FromCaller,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::ToCaller, Track::FromCaller];
}

/// Structured tag metadata of one fragment.
///
/// The sequence number is mandatory; the raw entries are kept for
/// diagnostics (a transport may embed a continuation token usable as a
/// restart hint after a read error).
#[derive(Clone, Debug)]
pub struct FragmentTags {
    pub number: FragmentNumber,
    pub entries: BTreeMap<String, String>,
}

impl FragmentTags {
    #[must_use]
    pub fn new(number: FragmentNumber) -> Self {
        Self {
            number,
            entries: BTreeMap::new(),
        }
    }
}

/// Fragment-parsing seam: tag extraction plus per-track payload extraction.
///
/// A track being absent from a fragment is a normal outcome (`Ok(None)`),
/// never an error; not every fragment carries both tracks.
pub trait TrackDemux<F>: Send + Sync {
    fn fragment_tags(&self, fragment: &F) -> ConsumerResult<FragmentTags>;

    fn track_data(&self, fragment: &F, track: Track) -> ConsumerResult<Option<Bytes>>;
}

impl<F, D> TrackDemux<F> for Arc<D>
where
    D: TrackDemux<F> + ?Sized,
{
    fn fragment_tags(&self, fragment: &F) -> ConsumerResult<FragmentTags> {
        (**self).fragment_tags(fragment)
    }

    fn track_data(&self, fragment: &F, track: Track) -> ConsumerResult<Option<Bytes>> {
        (**self).track_data(fragment, track)
    }
}
