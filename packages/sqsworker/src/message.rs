use serde::de::DeserializeOwned;
use serde_json as json;

use crate::arn;
use crate::error::MessageError;
use crate::lambda::sqs::SqsMessage;

pub trait MessageExt {
    /// The message id, or `"unknown"` when the event omitted it.
    fn id(&self) -> &str;

    fn required_receipt_handle(&self) -> Result<&str, MessageError>;

    fn required_event_source_arn(&self) -> Result<&str, MessageError>;

    /// URL of the queue this message was delivered from.
    fn queue_url(&self, domain: &str) -> Result<String, MessageError>;

    fn json_body<T>(&self) -> Result<T, MessageError>
    where T: DeserializeOwned;
}

impl MessageExt for SqsMessage {
    fn id(&self) -> &str {
        self.message_id.as_deref().unwrap_or("unknown")
    }

    fn required_receipt_handle(&self) -> Result<&str, MessageError> {
        self.receipt_handle
            .as_deref()
            .ok_or(MessageError::MissingAttribute("receipt handle"))
    }

    fn required_event_source_arn(&self) -> Result<&str, MessageError> {
        self.event_source_arn
            .as_deref()
            .ok_or(MessageError::MissingAttribute("event source arn"))
    }

    fn queue_url(&self, domain: &str) -> Result<String, MessageError> {
        let source_arn = self.required_event_source_arn()?;
        Ok(arn::queue_url_with_domain(source_arn, domain)?)
    }

    fn json_body<T>(&self) -> Result<T, MessageError>
    where T: DeserializeOwned {
        let body = self
            .body
            .as_deref()
            .ok_or(MessageError::MissingAttribute("body"))?;
        Ok(json::from_str(body)?)
    }
}
