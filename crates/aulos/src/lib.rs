#![forbid(unsafe_code)]

//! # Aulos
//!
//! Facade crate for bounded media-stream audio extraction: pull the two
//! audio tracks of a conversation out of a fragment-number window of a
//! stream, package them as WAV and store the result, one record at a time
//! across a batch.
//!
//! ## Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use aulos::prelude::*;
//!
//! let processor = BatchProcessor::new(source, demux, store, BatchConfig::new());
//! let report = processor.process_batch(&records).await;
//! println!("{}", report.summary());
//! ```

// ── Re-export sub-crates ────────────────────────────────────────────────

pub mod audio {
    pub use aulos_audio::*;
}

pub mod batch {
    pub use aulos_batch::*;
}

pub mod consumer {
    pub use aulos_consumer::*;
}

pub mod core {
    pub use aulos_core::*;
}

// ── Prelude ─────────────────────────────────────────────────────────────

pub mod prelude {
    pub use aulos_audio::{PcmSpec, package_wav};
    pub use aulos_batch::{
        BatchConfig, BatchProcessor, BatchRecord, BatchReport, ExtractionOutcome, ObjectStore,
        PutRequest, Stage,
    };
    pub use aulos_consumer::{
        BoundedConsumer, ConsumerOutput, ConsumerState, FragmentEvent, FragmentSource,
        StartSelector, TerminationReason, Track, TrackDemux,
    };
    pub use aulos_core::{ContactId, FragmentNumber, StreamLocation};
}
