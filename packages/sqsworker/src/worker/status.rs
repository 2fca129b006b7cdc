use tracing::info;

use super::BatchReport;

/// Sink for the once-per-batch status line.
pub trait StatusReporter: Send + Sync {
    fn report(&self, report: &BatchReport);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingStatusReporter;

impl StatusReporter for TracingStatusReporter {
    fn report(&self, report: &BatchReport) {
        info!(
            message = "batch_processed",
            received = report.received,
            completed = report.completed
        );
    }
}
