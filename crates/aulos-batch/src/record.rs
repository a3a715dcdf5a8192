#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use aulos_core::{ContactId, FragmentNumber, StreamLocation};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;

use crate::{BatchError, BatchResult};

/// One opaque inbound record: a base64-encoded structured payload.
#[derive(Clone, Debug, Deserialize)]
pub struct BatchRecord {
    pub data: String,
}

impl BatchRecord {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// The decoded payload of one record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RecordPayload {
    pub contact_id: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub recordings: Vec<RecordingEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RecordingEntry {
    pub location: String,
    pub fragment_start_number: String,
    pub fragment_stop_number: String,
}

/// Decoded and validated record payload.
#[derive(Debug)]
pub(crate) struct DecodedRecord {
    pub contact_id: ContactId,
    pub attributes: BTreeMap<String, String>,
    pub recordings: Vec<RecordingEntry>,
}

/// Decode stage: base64, UTF-8, JSON, correlation id.
pub(crate) fn decode_record(record: &BatchRecord) -> BatchResult<DecodedRecord> {
    let raw = STANDARD
        .decode(record.data.as_bytes())
        .map_err(|err| BatchError::Decode(format!("invalid base64: {err}")))?;
    let text = String::from_utf8(raw)
        .map_err(|err| BatchError::Decode(format!("payload is not utf-8: {err}")))?;
    let payload: RecordPayload = serde_json::from_str(&text)
        .map_err(|err| BatchError::Decode(format!("invalid payload json: {err}")))?;
    let contact_id = ContactId::new(payload.contact_id)
        .map_err(|err| BatchError::Decode(err.to_string()))?;
    Ok(DecodedRecord {
        contact_id,
        attributes: payload.attributes,
        recordings: payload.recordings,
    })
}

/// One unit of batch work: which stream to read and the inclusive fragment
/// window to extract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub contact_id: ContactId,
    pub stream_name: String,
    pub start: FragmentNumber,
    pub stop: FragmentNumber,
}

/// Range-extraction stage: stream name plus inclusive start/stop numbers,
/// parsed as full-precision integers from the first recordings descriptor.
pub(crate) fn extraction_request(decoded: &DecodedRecord) -> BatchResult<ExtractionRequest> {
    let recording = decoded
        .recordings
        .first()
        .ok_or_else(|| BatchError::RangeExtraction("record has no recordings".into()))?;

    let location = StreamLocation::parse(recording.location.as_str())
        .map_err(|err| BatchError::RangeExtraction(err.to_string()))?;
    let start: FragmentNumber = recording
        .fragment_start_number
        .parse()
        .map_err(|err: aulos_core::CoreError| BatchError::RangeExtraction(err.to_string()))?;
    let stop: FragmentNumber = recording
        .fragment_stop_number
        .parse()
        .map_err(|err: aulos_core::CoreError| BatchError::RangeExtraction(err.to_string()))?;

    Ok(ExtractionRequest {
        contact_id: decoded.contact_id.clone(),
        stream_name: location.stream_name().to_string(),
        start,
        stop,
    })
}
