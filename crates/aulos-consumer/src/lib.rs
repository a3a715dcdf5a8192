#![forbid(unsafe_code)]

//! `aulos-consumer`
//!
//! The bounded fragment consumer: a state machine that drains an
//! asynchronously delivered sequence of stream fragments, filters them
//! against a fragment-number bound, demultiplexes the two audio tracks per
//! fragment and accumulates raw PCM until the stream terminates.
//!
//! ## Design
//! - [`FragmentSource`]: transport seam delivering [`FragmentEvent`]s
//! - [`TrackDemux`]: parsing seam extracting tags and per-track payloads
//! - [`BoundedConsumer`]: owns the accumulator and the state machine;
//!   `run()` drains one event stream to termination, `spawn()` runs it on a
//!   task and hands back an observable [`ConsumerTask`]

mod accumulator;
mod consumer;
mod demux;
mod error;
mod filter;
mod source;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use accumulator::DualTrackAccumulator;
pub use consumer::{
    BoundedConsumer, ConsumerOutput, ConsumerState, ConsumerTask, TerminationReason,
};
pub use demux::{FragmentTags, Track, TrackDemux};
pub use error::{ConsumerError, ConsumerResult};
pub use filter::{Classification, classify};
pub use source::{FragmentDescriptor, FragmentEvent, FragmentSource, FragmentStream, StartSelector};
