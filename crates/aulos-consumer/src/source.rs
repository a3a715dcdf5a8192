#![forbid(unsafe_code)]

use std::{pin::Pin, time::Duration};

use async_trait::async_trait;
use aulos_core::FragmentNumber;
use futures::Stream;

use crate::{ConsumerError, ConsumerResult};

/// One arrived unit of stream data.
///
/// Created by the transport on each arrival, consumed synchronously by the
/// consumer and discarded. The receive duration is diagnostic only.
#[derive(Debug)]
pub struct FragmentDescriptor<F> {
    pub fragment: F,
    pub receive_duration: Duration,
}

impl<F> FragmentDescriptor<F> {
    pub fn new(fragment: F, receive_duration: Duration) -> Self {
        Self {
            fragment,
            receive_duration,
        }
    }
}

/// Events delivered by a [`FragmentSource`].
///
/// A well-behaved source delivers zero or more `Arrived` events, may
/// interleave `Error` events (read failures the transport will retry), and
/// ends with exactly one `Complete`. Dropping the stream without `Complete`
/// is treated as exhaustion by the consumer.
#[derive(Debug)]
pub enum FragmentEvent<F> {
    Arrived(FragmentDescriptor<F>),
    Complete,
    Error(ConsumerError),
}

pub type FragmentStream<F> = Pin<Box<dyn Stream<Item = FragmentEvent<F>> + Send>>;

/// Where the transport should begin delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartSelector {
    /// Deliver fragments at or after this fragment number.
    FragmentNumber(FragmentNumber),
    /// Deliver from the oldest fragment the stream retains.
    Earliest,
}

/// Transport seam: opens an ordered fragment-event stream for one media
/// stream.
///
/// Implementations must not redeliver a fragment already signaled and must
/// enforce the start selector themselves; the consumer only checks the upper
/// bound.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    type Fragment: Send + 'static;

    async fn open(
        &self,
        stream_name: &str,
        start: StartSelector,
    ) -> ConsumerResult<FragmentStream<Self::Fragment>>;
}
