use std::fmt::Display;

use async_trait::async_trait;
use aws_sdk_sqs::types::SdkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("sqs error: {0}")]
    Sdk(String),

    #[error("delete rejected: {0}")]
    Rejected(String),
}

impl<T> From<SdkError<T>> for DeleteError
where SdkError<T>: Display
{
    fn from(sdk_err: SdkError<T>) -> Self {
        DeleteError::Sdk(sdk_err.to_string())
    }
}

/// The one queue operation a worker needs: acknowledging a message by
/// deleting it. Shared across every in-flight message of a batch.
#[async_trait]
pub trait DeleteClient: Send + Sync {
    async fn delete_message(&self, queue_url: &str, receipt_handle: &str)
        -> Result<(), DeleteError>;
}

#[derive(Debug, Clone)]
pub struct SqsDeleteClient {
    client: aws_sdk_sqs::Client,
}

#[async_trait]
impl DeleteClient for SqsDeleteClient {
    async fn delete_message(
        &self,
        queue_url: &str,
        receipt_handle: &str,
    ) -> Result<(), DeleteError> {
        self.client
            .delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await?;

        Ok(())
    }
}

impl SqsDeleteClient {
    pub fn new(client: aws_sdk_sqs::Client) -> SqsDeleteClient {
        SqsDeleteClient { client }
    }

    pub async fn create() -> SqsDeleteClient {
        let sdk_config = aws_config::load_from_env().await;

        SqsDeleteClient::new(aws_sdk_sqs::Client::new(&sdk_config))
    }
}
