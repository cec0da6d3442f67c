//! Text model provider errors.

use crate::RetryableError;
use crate::retry::{is_transient_status, status_strategy_params};

/// Text provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// API token missing from the environment
    #[display("{} environment variable not set", _0)]
    MissingApiToken(String),

    /// Transport-level failure before a response was received
    #[display("Request failed: {}", _0)]
    Http(String),

    /// Provider returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Response body could not be interpreted
    #[display("Response conversion error: {}", _0)]
    ResponseConversion(String),
}

impl ModelsErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ModelsErrorKind::Api { status, .. } => is_transient_status(*status),
            ModelsErrorKind::Http(_) => true,
            _ => false,
        }
    }

    /// Get retry strategy parameters for this error type.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            ModelsErrorKind::Api { status, .. } => status_strategy_params(*status),
            ModelsErrorKind::Http(_) => (1000, 3, 10),
            _ => (2000, 5, 60),
        }
    }
}

/// Model provider error with location tracking.
///
/// # Examples
///
/// ```
/// use storybook_error::{ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::MissingApiToken("HUGGINGFACE_API_TOKEN".into()));
/// assert!(format!("{}", err).contains("HUGGINGFACE_API_TOKEN"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl RetryableError for ModelsError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
