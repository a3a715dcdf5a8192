#![forbid(unsafe_code)]

//! `aulos-batch`
//!
//! The batch record processor: decodes inbound records, routes them on their
//! processing flag, drives one bounded fragment consumer per record, stores
//! the packaged artifact and reports a per-record outcome.
//!
//! Records are fully isolated from each other: any per-record failure
//! becomes a [`ExtractionOutcome::Failed`] entry in the [`BatchReport`], and
//! `process_batch` never returns an error past its boundary.

mod config;
mod error;
mod outcome;
mod path;
mod processor;
mod record;
mod routing;
mod store;
mod tags;

pub use config::BatchConfig;
pub use error::{BatchError, BatchResult};
pub use outcome::{BatchReport, ExtractionOutcome, Stage};
pub use path::artifact_key;
pub use processor::BatchProcessor;
pub use record::{BatchRecord, ExtractionRequest};
pub use routing::Route;
pub use store::{MemoryStore, ObjectStore, PutRequest, StoreError, StoreResult};
pub use tags::build_tag_string;
