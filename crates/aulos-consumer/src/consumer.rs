#![forbid(unsafe_code)]

use std::marker::PhantomData;

use aulos_audio::{PcmSpec, package_wav};
use aulos_core::FragmentNumber;
use bytes::Bytes;
use futures::StreamExt;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use crate::{
    Classification, ConsumerError, ConsumerResult, DualTrackAccumulator, FragmentDescriptor,
    FragmentEvent, FragmentStream, FragmentTags, Track, TrackDemux, classify,
};

/// Why a consumer stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationReason {
    /// A fragment past the inclusive end bound arrived; the range is
    /// satisfied.
    BoundReached,
    /// The transport signaled no more fragments. May occur before the bound
    /// (a live producer that stopped early), so callers wanting a
    /// completeness check should inspect the last-seen tags.
    StreamExhausted,
    /// The cancellation token fired.
    Cancelled,
}

/// Consumer lifecycle. A single transition: fragments are awaited until a
/// boundary or terminal event moves the machine to `Terminated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumerState {
    AwaitingFragments,
    Terminated(TerminationReason),
}

impl ConsumerState {
    #[must_use]
    pub fn is_terminated(self) -> bool {
        matches!(self, ConsumerState::Terminated(_))
    }
}

/// Result of one consumer run: packaged WAV artifacts per track (absent when
/// the track accumulated nothing or packaging failed) plus diagnostics.
#[derive(Debug)]
pub struct ConsumerOutput {
    pub reason: TerminationReason,
    pub to_caller: Option<Bytes>,
    pub from_caller: Option<Bytes>,
    pub last_tags: Option<FragmentTags>,
}

/// Bounded fragment consumer.
///
/// Owns one [`DualTrackAccumulator`] and drives it from fragment-arrival
/// events. Handlers take `&mut self`, so event handling is serialized by
/// ownership; [`BoundedConsumer::run`] feeds them from a single event
/// stream, which is the one blocking point of the pipeline.
pub struct BoundedConsumer<F, D> {
    demux: D,
    end: FragmentNumber,
    pcm_spec: PcmSpec,
    cancel: CancellationToken,
    accumulator: DualTrackAccumulator,
    state: ConsumerState,
    state_tx: watch::Sender<ConsumerState>,
    last_tags: Option<FragmentTags>,
    _fragment: PhantomData<fn(F)>,
}

impl<F, D> BoundedConsumer<F, D>
where
    D: TrackDemux<F>,
{
    pub fn new(demux: D, end: FragmentNumber) -> Self {
        let (state_tx, _) = watch::channel(ConsumerState::AwaitingFragments);
        Self {
            demux,
            end,
            pcm_spec: PcmSpec::TELEPHONY,
            cancel: CancellationToken::new(),
            accumulator: DualTrackAccumulator::new(),
            state: ConsumerState::AwaitingFragments,
            state_tx,
            last_tags: None,
            _fragment: PhantomData,
        }
    }

    /// Override the PCM spec used when packaging finished buffers.
    #[must_use]
    pub fn with_pcm_spec(mut self, spec: PcmSpec) -> Self {
        self.pcm_spec = spec;
        self
    }

    /// Attach a cancellation token; when it fires mid-run the consumer
    /// terminates with [`TerminationReason::Cancelled`].
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn state(&self) -> ConsumerState {
        self.state
    }

    /// Observe state transitions without owning the consumer.
    #[must_use]
    pub fn state_receiver(&self) -> watch::Receiver<ConsumerState> {
        self.state_tx.subscribe()
    }

    /// Handle one fragment arrival.
    ///
    /// Late events after termination are ignored. A fragment whose tags or
    /// track payloads cannot be extracted contributes nothing and never
    /// aborts the run; both tracks are extracted before either is appended,
    /// so a failing fragment leaves the buffers exactly as if it had been
    /// skipped.
    pub fn on_fragment(&mut self, descriptor: FragmentDescriptor<F>) {
        if self.state.is_terminated() {
            trace!("late fragment event ignored");
            return;
        }

        trace!(
            receive_duration_ms = descriptor.receive_duration.as_millis() as u64,
            "fragment received"
        );

        let tags = match self.demux.fragment_tags(&descriptor.fragment) {
            Ok(tags) => tags,
            Err(err) => {
                warn!(error = %err, "fragment tags unreadable, fragment contributed nothing");
                return;
            }
        };
        let number = tags.number;
        self.last_tags = Some(tags);

        match classify(number, self.end) {
            Classification::PastEnd => {
                debug!(fragment = %number, end = %self.end, "past end bound, terminating");
                self.terminate(TerminationReason::BoundReached);
            }
            Classification::InRange => {
                let to = self.demux.track_data(&descriptor.fragment, Track::ToCaller);
                let from = self
                    .demux
                    .track_data(&descriptor.fragment, Track::FromCaller);
                match (to, from) {
                    (Ok(to), Ok(from)) => {
                        if let Some(span) = to {
                            self.accumulator.append(Track::ToCaller, &span);
                        }
                        if let Some(span) = from {
                            self.accumulator.append(Track::FromCaller, &span);
                        }
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        warn!(
                            fragment = %number,
                            error = %err,
                            "track extraction failed, fragment contributed nothing"
                        );
                    }
                }
            }
        }
    }

    /// Handle the transport's no-more-fragments signal.
    pub fn on_complete(&mut self) {
        if self.state.is_terminated() {
            trace!("late completion event ignored");
            return;
        }
        debug!("stream exhausted");
        self.terminate(TerminationReason::StreamExhausted);
    }

    /// Handle a transport read failure.
    ///
    /// Deliberately non-terminal: a transient read error is not graceful
    /// exhaustion. The last-good tags are included so a caller can restart
    /// delivery from that point.
    pub fn on_error(&mut self, err: &ConsumerError) {
        error!(
            error = %err,
            last_good_tags = ?self.last_tags,
            "stream read error"
        );
    }

    fn terminate(&mut self, reason: TerminationReason) {
        self.state = ConsumerState::Terminated(reason);
        let _ = self.state_tx.send(self.state);
    }

    /// Finalize the accumulator and package each non-empty track.
    ///
    /// A packaging failure on one track is logged and does not prevent the
    /// other from being packaged.
    fn finish(self) -> ConsumerOutput {
        let reason = match self.state {
            ConsumerState::Terminated(reason) => reason,
            // finish() is only reachable from run() after termination.
            ConsumerState::AwaitingFragments => TerminationReason::StreamExhausted,
        };
        let (to_raw, from_raw) = self.accumulator.finalize();
        ConsumerOutput {
            reason,
            to_caller: package_track(Track::ToCaller, &to_raw, self.pcm_spec),
            from_caller: package_track(Track::FromCaller, &from_raw, self.pcm_spec),
            last_tags: self.last_tags,
        }
    }

    /// Drain the event stream to termination and return the packaged output.
    ///
    /// This is the consumer's wait contract: the caller awaits the future,
    /// no polling loop involved. Events arriving after termination are
    /// dropped with the stream.
    pub async fn run(mut self, mut events: FragmentStream<F>) -> ConsumerOutput {
        while !self.state.is_terminated() {
            tokio::select! {
                () = self.cancel.cancelled() => {
                    debug!("consumer cancelled");
                    self.terminate(TerminationReason::Cancelled);
                }
                event = events.next() => match event {
                    Some(FragmentEvent::Arrived(descriptor)) => self.on_fragment(descriptor),
                    Some(FragmentEvent::Complete) => self.on_complete(),
                    Some(FragmentEvent::Error(err)) => self.on_error(&err),
                    None => {
                        debug!("event stream dropped without completion signal");
                        self.on_complete();
                    }
                },
            }
        }
        self.finish()
    }
}

impl<F, D> BoundedConsumer<F, D>
where
    D: TrackDemux<F> + Send + 'static,
    F: Send + 'static,
{
    /// Run on a spawned task, returning a handle that can observe the state
    /// and await termination.
    #[must_use]
    pub fn spawn(self, events: FragmentStream<F>) -> ConsumerTask {
        let state_rx = self.state_tx.subscribe();
        let join = tokio::spawn(self.run(events));
        ConsumerTask { state_rx, join }
    }
}

/// Handle to a spawned [`BoundedConsumer`].
#[derive(Debug)]
pub struct ConsumerTask {
    state_rx: watch::Receiver<ConsumerState>,
    join: tokio::task::JoinHandle<ConsumerOutput>,
}

impl ConsumerTask {
    #[must_use]
    pub fn state(&self) -> ConsumerState {
        *self.state_rx.borrow()
    }

    /// Await termination and collect the output.
    pub async fn wait(self) -> ConsumerResult<ConsumerOutput> {
        self.join
            .await
            .map_err(|err| ConsumerError::TaskJoin(err.to_string()))
    }
}

fn package_track(track: Track, raw: &Bytes, spec: PcmSpec) -> Option<Bytes> {
    if raw.is_empty() {
        return None;
    }
    match package_wav(spec, raw) {
        Ok(wav) => Some(wav),
        Err(err) => {
            warn!(?track, error = %err, "track packaging failed");
            None
        }
    }
}
