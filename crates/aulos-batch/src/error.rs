#![forbid(unsafe_code)]

use thiserror::Error;

/// Per-record processing failures, before they are folded into a
/// [`crate::ExtractionOutcome::Failed`] at the processor boundary.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("record decode failed: {0}")]
    Decode(String),

    #[error("range extraction failed: {0}")]
    RangeExtraction(String),

    #[error(transparent)]
    Core(#[from] aulos_core::CoreError),

    #[error(transparent)]
    Consumer(#[from] aulos_consumer::ConsumerError),

    #[error(transparent)]
    Store(#[from] crate::StoreError),
}

pub type BatchResult<T> = Result<T, BatchError>;
