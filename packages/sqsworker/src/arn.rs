use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_URL_DOMAIN: &str = "amazonaws.com";

const ARN_FIELDS: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArnError {
    #[error("malformed queue arn `{arn}`: expected at least 6 fields, found {fields}")]
    Malformed { arn: String, fields: usize },

    #[error("malformed queue arn `{arn}`: {field} is empty")]
    EmptyField { arn: String, field: &'static str },
}

/// The positional parts of a queue ARN, `arn:<partition>:<service>:<region>:<account>:<queue>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueArn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account_id: String,
    pub queue_name: String,
}

impl QueueArn {
    pub fn url(&self, domain: &str) -> String {
        format!(
            "https://{}.{}.{}/{}/{}",
            self.service, self.region, domain, self.account_id, self.queue_name
        )
    }
}

impl FromStr for QueueArn {
    type Err = ArnError;

    /// Only the first six fields are read. Anything after a sixth colon is
    /// dropped, so a queue name containing `:` comes back truncated.
    fn from_str(arn: &str) -> Result<Self, Self::Err> {
        let parts = arn.split(':').collect::<Vec<_>>();

        if parts.len() < ARN_FIELDS {
            return Err(ArnError::Malformed {
                arn: arn.to_string(),
                fields: parts.len(),
            });
        }

        let required = |idx: usize, field: &'static str| {
            let value = parts[idx];
            if value.is_empty() {
                Err(ArnError::EmptyField {
                    arn: arn.to_string(),
                    field,
                })
            } else {
                Ok(value.to_string())
            }
        };

        Ok(QueueArn {
            partition: parts[1].to_string(),
            service: required(2, "service")?,
            region: required(3, "region")?,
            account_id: required(4, "account id")?,
            queue_name: required(5, "queue name")?,
        })
    }
}

/// Convert the ARN of an SQS queue into its queue URL.
pub fn queue_url(arn: &str) -> Result<String, ArnError> {
    queue_url_with_domain(arn, DEFAULT_URL_DOMAIN)
}

pub fn queue_url_with_domain(arn: &str, domain: &str) -> Result<String, ArnError> {
    Ok(arn.parse::<QueueArn>()?.url(domain))
}
