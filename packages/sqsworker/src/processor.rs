use std::future::Future;

use async_trait::async_trait;

use crate::lambda::sqs::SqsMessage;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// User logic run once per message per delivery.
///
/// A message whose delete fails after it was processed is delivered again,
/// so implementations must be idempotent.
#[async_trait]
pub trait MessageProcessor: Send + Sync {
    async fn process(&self, message: &SqsMessage) -> Result<(), BoxError>;
}

/// Adapts an async closure into a [`MessageProcessor`]. Each call gets its
/// own copy of the message.
pub struct FnProcessor<F>(F);

pub fn processor_fn<F, Fut>(f: F) -> FnProcessor<F>
where
    F: Fn(SqsMessage) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    FnProcessor(f)
}

#[async_trait]
impl<F, Fut> MessageProcessor for FnProcessor<F>
where
    F: Fn(SqsMessage) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    async fn process(&self, message: &SqsMessage) -> Result<(), BoxError> {
        (self.0)(message.clone()).await
    }
}
