use crate::arn::DEFAULT_URL_DOMAIN;
use crate::util;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkerConfig {
    /// Domain used when turning a queue ARN into its URL.
    pub url_domain: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        WorkerConfig {
            url_domain: DEFAULT_URL_DOMAIN.to_string(),
        }
    }
}

impl WorkerConfig {
    pub fn from_env() -> WorkerConfig {
        Self::from_lookup(util::optional_env)
    }

    fn from_lookup<F>(lookup: F) -> WorkerConfig
    where F: Fn(&str) -> Option<String> {
        let defaults = WorkerConfig::default();

        WorkerConfig {
            url_domain: lookup("SQS_URL_DOMAIN").unwrap_or(defaults.url_domain),
        }
    }
}
