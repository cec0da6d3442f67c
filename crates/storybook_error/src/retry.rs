//! Retry classification shared by provider errors.

/// Trait for errors that support retry logic.
///
/// This trait allows error types to specify whether they should trigger a retry
/// and what retry strategy parameters to use.
///
/// # Examples
///
/// ```
/// use storybook_error::{ModelsError, ModelsErrorKind, RetryableError};
///
/// let err = ModelsError::new(ModelsErrorKind::Api {
///     status: 503,
///     message: "Model is currently loading".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// let (backoff, retries, max_delay) = err.retry_strategy_params();
/// assert_eq!(backoff, 2000);
/// assert_eq!(retries, 5);
/// assert_eq!(max_delay, 60);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (model loading) or 429 (rate limit) should
    /// return true. Permanent errors like 401 (unauthorized) or 400 (bad
    /// request) should return false.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 5, 60)
    }
}

/// Classify an HTTP status code as transient.
pub(crate) fn is_transient_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

/// Retry parameters keyed by HTTP status.
pub(crate) fn status_strategy_params(status: u16) -> (u64, usize, u64) {
    match status {
        429 => (5000, 3, 40),
        503 => (2000, 5, 60),
        500 | 502 | 504 => (1000, 3, 8),
        408 => (2000, 4, 30),
        _ => (2000, 5, 60),
    }
}
