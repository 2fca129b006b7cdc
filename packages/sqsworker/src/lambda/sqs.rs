use aws_lambda_events::event::sqs;
pub use lambda_runtime::Error;
use lambda_runtime::LambdaEvent;
pub use sqs::SqsMessage;

pub type SqsEvent = LambdaEvent<sqs::SqsEvent>;

/// Wrap a set of records the way the runtime delivers them.
pub fn event(records: Vec<SqsMessage>) -> SqsEvent {
    LambdaEvent::new(sqs::SqsEvent { records }, Default::default())
}
