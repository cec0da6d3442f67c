//! Transport-level retry for provider requests.
//!
//! Retries happen inside an adapter call and are invisible to the scene
//! pipeline: from its point of view each scene still makes exactly one text
//! call and at most one image call.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use storybook_error::RetryableError;
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
use tracing::{info, warn};

/// Overrides for the error-specific retry strategy.
///
/// `None` fields fall back to the parameters suggested by the error itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Disable retries entirely
    #[serde(default)]
    pub disabled: bool,
    /// Initial backoff in milliseconds
    #[serde(default)]
    pub initial_backoff_ms: Option<u64>,
    /// Maximum number of retries after the first attempt
    #[serde(default)]
    pub max_retries: Option<usize>,
    /// Upper bound on a single delay in seconds
    #[serde(default)]
    pub max_delay_secs: Option<u64>,
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn none() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Run `op`, retrying transient failures with jittered exponential backoff.
    pub(crate) async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        E: RetryableError + Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let first = match op().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if self.disabled || !first.is_retryable() {
            return Err(first);
        }

        let (mut initial_ms, mut max_retries, mut max_delay_secs) = first.retry_strategy_params();
        if let Some(ms) = self.initial_backoff_ms {
            initial_ms = ms;
        }
        if let Some(retries) = self.max_retries {
            max_retries = retries;
        }
        if let Some(secs) = self.max_delay_secs {
            max_delay_secs = secs;
        }

        if max_retries == 0 {
            return Err(first);
        }

        info!(
            error = %first,
            initial_backoff_ms = initial_ms,
            max_retries,
            max_delay_secs,
            "Transient provider error, retrying"
        );

        let strategy = ExponentialBackoff::from_millis(initial_ms)
            .factor(2)
            .max_delay(std::time::Duration::from_secs(max_delay_secs))
            .map(jitter)
            // Retry::spawn makes its own immediate attempt before the first delay
            .take(max_retries - 1);

        Retry::spawn(strategy, || {
            let attempt = op();
            async move {
                match attempt.await {
                    Ok(value) => Ok(value),
                    Err(e) if e.is_retryable() => {
                        warn!(error = %e, "Provider request failed, will retry");
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    }
                    Err(e) => {
                        warn!(error = %e, "Permanent provider error, failing immediately");
                        Err(RetryError::Permanent(e))
                    }
                }
            }
        })
        .await
    }
}
