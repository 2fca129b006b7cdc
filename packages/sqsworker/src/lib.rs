pub mod arn;
pub mod client;
pub mod config;
pub mod error;
pub mod lambda;
pub mod message;
pub mod processor;
pub mod util;
pub mod worker;

pub use client::{DeleteClient, SqsDeleteClient};
pub use config::WorkerConfig;
pub use message::MessageExt;
pub use processor::{processor_fn, BoxError, MessageProcessor};
pub use worker::{BatchReport, Handler};
pub use {serde, serde_json as json, tokio};
