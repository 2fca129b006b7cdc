use thiserror::Error;

use crate::arn::ArnError;
use crate::client::DeleteError;
use crate::processor::BoxError;

/// Why a single message was left on its queue.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("processing failed: {0}")]
    Processing(BoxError),

    #[error("message is missing {0}")]
    MissingAttribute(&'static str),

    #[error(transparent)]
    InvalidArn(#[from] ArnError),

    #[error("delete failed: {0}")]
    Delete(#[from] DeleteError),

    #[error("message body is not valid json: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("failed to complete all given messages ({completed} of {total} completed)")]
    PartialBatchFailure { completed: usize, total: usize },
}
