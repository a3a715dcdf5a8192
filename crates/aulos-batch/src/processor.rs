#![forbid(unsafe_code)]

use std::sync::Arc;

use aulos_consumer::{
    BoundedConsumer, ConsumerOutput, FragmentSource, StartSelector, TerminationReason, Track,
    TrackDemux,
};
use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{
    BatchConfig, BatchRecord, BatchReport, ExtractionOutcome, ExtractionRequest, ObjectStore,
    PutRequest, Route, Stage, build_tag_string,
    record::{decode_record, extraction_request},
    routing::route,
};

/// Drives one bounded fragment consumer per inbound record and stores the
/// resulting artifact.
///
/// The collaborators are process-scoped, dependency-injected clients: create
/// the processor once and reuse it across invocations. Records are handled
/// sequentially and share no mutable state, so every failure stays confined
/// to its own record.
pub struct BatchProcessor<S, D> {
    source: Arc<S>,
    demux: Arc<D>,
    store: Arc<dyn ObjectStore>,
    config: BatchConfig,
}

impl<S, D> BatchProcessor<S, D>
where
    S: FragmentSource,
    D: TrackDemux<S::Fragment> + Send + Sync + 'static,
{
    pub fn new(
        source: Arc<S>,
        demux: Arc<D>,
        store: Arc<dyn ObjectStore>,
        config: BatchConfig,
    ) -> Self {
        Self {
            source,
            demux,
            store,
            config,
        }
    }

    /// Process every record independently and return the aggregate report.
    ///
    /// Never fails as a whole: each record yields exactly one outcome, in
    /// input order, and a failure at any stage moves on to the next record.
    pub async fn process_batch(&self, records: &[BatchRecord]) -> BatchReport {
        info!(total = records.len(), "processing batch");
        let mut report = BatchReport::default();

        for (index, record) in records.iter().enumerate() {
            let outcome = self.process_record(index + 1, record).await;
            match &outcome {
                ExtractionOutcome::Failed { stage, message } => {
                    warn!(record = index + 1, %stage, message, "record failed");
                }
                outcome => debug!(record = index + 1, %outcome, "record finished"),
            }
            report.push(outcome);
        }

        info!(summary = %report.summary(), "batch complete");
        report
    }

    async fn process_record(&self, number: usize, record: &BatchRecord) -> ExtractionOutcome {
        let decoded = match decode_record(record) {
            Ok(decoded) => decoded,
            Err(err) => return failed(Stage::Decode, err),
        };

        match route(&decoded.attributes, &self.config.flag_attribute) {
            Route::Process => {
                info!(record = number, contact = %decoded.contact_id, "processing recording");
            }
            Route::AlreadyProcessed => return ExtractionOutcome::SkippedAlreadyProcessed,
            Route::InvalidFlag => return ExtractionOutcome::SkippedInvalidFlag,
        }

        let request = match extraction_request(&decoded) {
            Ok(request) => request,
            Err(err) => return failed(Stage::RangeExtraction, err),
        };
        let tagging = build_tag_string(&decoded.attributes, &self.config.tag_prefix);

        let output = match self.consume(&request).await {
            Ok(output) => output,
            Err(message) => {
                return ExtractionOutcome::Failed {
                    stage: Stage::Consumption,
                    message,
                };
            }
        };

        let artifact = match self.config.stored_track {
            Track::ToCaller => output.to_caller,
            Track::FromCaller => output.from_caller,
        };
        let Some(body) = artifact else {
            return ExtractionOutcome::Failed {
                stage: Stage::Storage,
                message: format!("no {:?} audio produced", self.config.stored_track),
            };
        };

        let key = artifact_key_now(&self.config, &request);
        info!(%key, "storing artifact");
        let put = PutRequest {
            key: key.clone(),
            body,
            content_type: self.config.content_type.clone(),
            tagging,
        };
        match self.store.put(put).await {
            Ok(()) => ExtractionOutcome::Success { key },
            Err(err) => failed(Stage::Storage, err),
        }
    }

    /// Open the transport and drain one consumer to termination, applying
    /// the per-record deadline when configured.
    async fn consume(&self, request: &ExtractionRequest) -> Result<ConsumerOutput, String> {
        let events = self
            .source
            .open(
                &request.stream_name,
                StartSelector::FragmentNumber(request.start),
            )
            .await
            .map_err(|err| err.to_string())?;

        let cancel = CancellationToken::new();
        let task = BoundedConsumer::new(self.demux.clone(), request.stop)
            .with_cancel(cancel.clone())
            .spawn(events);

        let output = match self.config.record_timeout {
            None => task.wait().await.map_err(|err| err.to_string())?,
            Some(limit) => {
                let wait = task.wait();
                tokio::pin!(wait);
                tokio::select! {
                    result = &mut wait => result.map_err(|err| err.to_string())?,
                    () = tokio::time::sleep(limit) => {
                        warn!(
                            stream = %request.stream_name,
                            limit_ms = limit.as_millis() as u64,
                            "record deadline reached, cancelling consumer"
                        );
                        cancel.cancel();
                        wait.await.map_err(|err| err.to_string())?
                    }
                }
            }
        };

        if output.reason == TerminationReason::Cancelled {
            return Err("consumption cancelled before the stream terminated".to_string());
        }
        debug!(reason = ?output.reason, "consumer terminated");
        Ok(output)
    }
}

fn artifact_key_now(config: &BatchConfig, request: &ExtractionRequest) -> String {
    crate::artifact_key(&config.base_path, &request.contact_id, Utc::now())
}

fn failed(stage: Stage, err: impl std::fmt::Display) -> ExtractionOutcome {
    ExtractionOutcome::Failed {
        stage,
        message: err.to_string(),
    }
}
