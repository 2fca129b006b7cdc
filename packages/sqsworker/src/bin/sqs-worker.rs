use std::sync::Arc;

use anyhow::Context;
use sqsworker::json;
use sqsworker::lambda;
use sqsworker::lambda::lambda_runtime::{run, service_fn};
use sqsworker::lambda::sqs::{self, SqsMessage};
use sqsworker::{processor_fn, BoxError, Handler, MessageExt, SqsDeleteClient, WorkerConfig};

#[tokio::main]
async fn main() -> Result<(), sqs::Error> {
    lambda::init_tracing();

    let config = WorkerConfig::from_env();
    let client = SqsDeleteClient::create().await;

    let processor = processor_fn(|message: SqsMessage| async move {
        let body: json::Value = message
            .json_body()
            .with_context(|| format!("message {} has an unreadable body", message.id()))?;

        tracing::info!(message = "message_received", message_id = message.id(), %body);

        Ok::<(), BoxError>(())
    });

    let handler = Handler::new(Arc::new(client), Arc::new(processor)).with_config(&config);

    run(service_fn(|event| handler.handle(event))).await
}
