pub mod status;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info_span, Instrument};

use self::status::{StatusReporter, TracingStatusReporter};
use crate::client::DeleteClient;
use crate::config::WorkerConfig;
use crate::error::{BatchError, MessageError};
use crate::lambda::{self, sqs};
use crate::lambda::sqs::SqsMessage;
use crate::message::MessageExt;
use crate::processor::MessageProcessor;
use crate::util;

/// Counts for one delivered batch. Which messages failed is not kept: the
/// ones left undeleted are what the queue delivers again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub received: usize,
    pub completed: usize,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.completed == self.received
    }

    pub fn into_result(self) -> Result<usize, BatchError> {
        if self.is_complete() {
            Ok(self.completed)
        } else {
            Err(BatchError::PartialBatchFailure {
                completed: self.completed,
                total: self.received,
            })
        }
    }
}

struct Collaborators {
    processor: Arc<dyn MessageProcessor>,
    client: Arc<dyn DeleteClient>,
    url_domain: String,
}

/// Processes SQS batches for a worker Lambda, deleting each message that
/// was handled successfully.
pub struct Handler {
    collaborators: Arc<Collaborators>,
    reporter: Arc<dyn StatusReporter>,
}

impl Handler {
    pub fn new(client: Arc<dyn DeleteClient>, processor: Arc<dyn MessageProcessor>) -> Handler {
        Handler {
            collaborators: Arc::new(Collaborators {
                processor,
                client,
                url_domain: WorkerConfig::default().url_domain,
            }),
            reporter: Arc::new(TracingStatusReporter),
        }
    }

    pub fn with_config(self, config: &WorkerConfig) -> Handler {
        let collaborators = Collaborators {
            processor: Arc::clone(&self.collaborators.processor),
            client: Arc::clone(&self.collaborators.client),
            url_domain: config.url_domain.clone(),
        };

        Handler {
            collaborators: Arc::new(collaborators),
            ..self
        }
    }

    pub fn with_reporter(self, reporter: Arc<dyn StatusReporter>) -> Handler {
        Handler { reporter, ..self }
    }

    /// Run every message of the batch concurrently and wait for all of them.
    ///
    /// Every message gets its own task, and all tasks are spawned before any
    /// outcome is awaited. Each task reports exactly once; a task that dies
    /// without reporting closes its end of the channel and counts as failed.
    pub async fn process_messages(&self, messages: Vec<SqsMessage>) -> BatchReport {
        let received = messages.len();

        if received == 0 {
            return BatchReport::default();
        }

        let (results, mut outcomes) = mpsc::channel(received);

        for message in messages {
            let collaborators = Arc::clone(&self.collaborators);
            let results = results.clone();

            tokio::spawn(
                async move {
                    let outcome = handle_message(
                        collaborators.processor.as_ref(),
                        collaborators.client.as_ref(),
                        &collaborators.url_domain,
                        &message,
                    )
                    .await;

                    match &outcome {
                        Ok(()) => {
                            tracing::debug!(message = "message_deleted", message_id = message.id())
                        }
                        Err(err) => tracing::warn!(
                            message = "message_failed",
                            message_id = message.id(),
                            error = %err
                        ),
                    }

                    // The channel holds one slot per message, so this never waits.
                    let _ = results.send(outcome).await;
                }
                .in_current_span(),
            );
        }

        drop(results);

        let mut reported = 0;
        let mut completed = 0;

        while let Some(outcome) = outcomes.recv().await {
            reported += 1;
            if outcome.is_ok() {
                completed += 1;
            }
        }

        if reported < received {
            tracing::error!(message = "message_aborted", count = received - reported);
        }

        BatchReport {
            received,
            completed,
        }
    }

    /// Entry point for the Lambda runtime. Reports the batch status once and
    /// fails the invocation if any message was not completed.
    pub async fn handle(&self, event: sqs::SqsEvent) -> Result<(), lambda::Error> {
        let batch_id = util::generate_id();
        let records = event.payload.records;

        let report = self
            .process_messages(records)
            .instrument(info_span!("batch", batch_id = %batch_id))
            .await;

        self.reporter.report(&report);

        report.into_result()?;

        Ok(())
    }
}

/// Process one message and, if that succeeds, delete it from the queue it
/// came from. A failed message is never deleted and nothing is retried.
pub async fn handle_message(
    processor: &dyn MessageProcessor,
    client: &dyn DeleteClient,
    url_domain: &str,
    message: &SqsMessage,
) -> Result<(), MessageError> {
    processor
        .process(message)
        .await
        .map_err(MessageError::Processing)?;

    let receipt_handle = message.required_receipt_handle()?;
    let queue_url = message.queue_url(url_domain)?;

    client.delete_message(&queue_url, receipt_handle).await?;

    Ok(())
}
