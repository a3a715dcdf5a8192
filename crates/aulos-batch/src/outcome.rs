#![forbid(unsafe_code)]

use std::fmt;

/// Pipeline stage at which a record failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Decode,
    Routing,
    RangeExtraction,
    TagExtraction,
    Consumption,
    Packaging,
    Storage,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Decode => "decode",
            Stage::Routing => "routing",
            Stage::RangeExtraction => "range extraction",
            Stage::TagExtraction => "tag extraction",
            Stage::Consumption => "consumption",
            Stage::Packaging => "packaging",
            Stage::Storage => "storage",
        };
        f.write_str(name)
    }
}

/// Terminal result of processing one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Artifact accepted by the object store, under `key`.
    Success { key: String },
    SkippedAlreadyProcessed,
    SkippedInvalidFlag,
    Failed { stage: Stage, message: String },
}

impl ExtractionOutcome {
    /// Terminal non-error: success or a deliberate skip.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        !matches!(self, ExtractionOutcome::Failed { .. })
    }
}

impl fmt::Display for ExtractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionOutcome::Success { key } => write!(f, "stored at {key}"),
            ExtractionOutcome::SkippedAlreadyProcessed => {
                f.write_str("skipped: recording already processed")
            }
            ExtractionOutcome::SkippedInvalidFlag => {
                f.write_str("skipped: processing flag not valid")
            }
            ExtractionOutcome::Failed { stage, message } => {
                write!(f, "failed at {stage}: {message}")
            }
        }
    }
}

/// Aggregate result of one batch invocation.
///
/// Holds exactly one outcome per input record, in input order, keyed by the
/// 1-based `Record #n` label. Returned to the caller, never persisted.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<(String, ExtractionOutcome)>,
    completed: usize,
}

impl BatchReport {
    pub(crate) fn push(&mut self, outcome: ExtractionOutcome) {
        if outcome.is_completed() {
            self.completed += 1;
        }
        let label = format!("Record #{}", self.outcomes.len() + 1);
        self.outcomes.push((label, outcome));
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Records that reached a terminal non-error state.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (&str, &ExtractionOutcome)> {
        self.outcomes
            .iter()
            .map(|(label, outcome)| (label.as_str(), outcome))
    }

    #[must_use]
    pub fn outcome(&self, label: &str) -> Option<&ExtractionOutcome> {
        self.outcomes
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, outcome)| outcome)
    }

    /// Invocation-level status: the batch itself always succeeds, partial
    /// per-record failures included.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        200
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Complete. Processed {} of {} records.",
            self.completed,
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_one_based_and_ordered() {
        let mut report = BatchReport::default();
        report.push(ExtractionOutcome::Success { key: "k1".into() });
        report.push(ExtractionOutcome::SkippedAlreadyProcessed);
        report.push(ExtractionOutcome::Failed {
            stage: Stage::Decode,
            message: "bad".into(),
        });

        let labels: Vec<_> = report.outcomes().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Record #1", "Record #2", "Record #3"]);
        assert_eq!(report.total(), 3);
        assert_eq!(report.completed(), 2);
    }

    #[test]
    fn summary_counts_completed_records() {
        let mut report = BatchReport::default();
        report.push(ExtractionOutcome::SkippedInvalidFlag);
        report.push(ExtractionOutcome::Failed {
            stage: Stage::Storage,
            message: "denied".into(),
        });
        assert_eq!(report.summary(), "Complete. Processed 1 of 2 records.");
        assert_eq!(report.status_code(), 200);
    }

    #[test]
    fn lookup_by_label() {
        let mut report = BatchReport::default();
        report.push(ExtractionOutcome::Success { key: "k".into() });
        assert!(matches!(
            report.outcome("Record #1"),
            Some(ExtractionOutcome::Success { .. })
        ));
        assert!(report.outcome("Record #2").is_none());
    }
}
