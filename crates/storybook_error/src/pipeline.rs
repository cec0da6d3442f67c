//! Scene pipeline error types.

/// Specific error conditions for the scene pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Text synthesis failed; the run cannot continue
    #[display("Text synthesis failed for scene {}: {}", scene, message)]
    TextSynthesis {
        /// Scene being generated when the failure happened
        scene: u32,
        /// Underlying adapter error
        message: String,
    },
    /// Scene count was not a positive integer
    #[display("Invalid scene count: {}", _0)]
    InvalidSceneCount(String),
    /// Story request could not be assembled
    #[display("Invalid story request: {}", _0)]
    InvalidRequest(String),
}

/// Error type for scene pipeline operations.
///
/// # Examples
///
/// ```
/// use storybook_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::TextSynthesis {
///     scene: 2,
///     message: "connection reset".to_string(),
/// });
/// assert!(format!("{}", err).contains("scene 2"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
