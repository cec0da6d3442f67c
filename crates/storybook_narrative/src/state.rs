//! Lifecycle of a single pipeline run.

use serde::{Deserialize, Serialize};

/// Where a [`ScenePipeline`](crate::ScenePipeline) is in its run.
///
/// A run moves forward only: `NotStarted`, then `GeneratingScene(1)` through
/// `GeneratingScene(n)`, then `Done`. A text-model failure ends the run in
/// `Failed`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum PipelineState {
    /// No scene has been requested yet
    #[display("not started")]
    NotStarted,
    /// Working on the given scene
    #[display("generating scene {}", _0)]
    GeneratingScene(u32),
    /// Every scene was generated
    #[display("done")]
    Done,
    /// The text model failed on `scene`
    #[display("failed at scene {}", scene)]
    Failed {
        /// Scene that could not be written
        scene: u32,
    },
}

impl PipelineState {
    /// Whether the run has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed { .. })
    }

    /// Whether moving from `self` to `next` is a legal forward step.
    pub fn can_transition_to(&self, next: &PipelineState) -> bool {
        use PipelineState::*;

        match (self, next) {
            (NotStarted, GeneratingScene(1)) => true,
            (GeneratingScene(current), GeneratingScene(n)) => *n == current + 1,
            (GeneratingScene(_), Done) => true,
            (GeneratingScene(current), Failed { scene }) => scene == current,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineState::*;

    #[test]
    fn test_forward_transitions() {
        assert!(NotStarted.can_transition_to(&GeneratingScene(1)));
        assert!(GeneratingScene(1).can_transition_to(&GeneratingScene(2)));
        assert!(GeneratingScene(3).can_transition_to(&Done));
        assert!(GeneratingScene(2).can_transition_to(&Failed { scene: 2 }));
    }

    #[test]
    fn test_rejected_transitions() {
        assert!(!NotStarted.can_transition_to(&GeneratingScene(2)));
        assert!(!NotStarted.can_transition_to(&Done));
        assert!(!GeneratingScene(2).can_transition_to(&GeneratingScene(1)));
        assert!(!GeneratingScene(2).can_transition_to(&GeneratingScene(2)));
        assert!(!GeneratingScene(2).can_transition_to(&Failed { scene: 1 }));
        assert!(!Done.can_transition_to(&GeneratingScene(1)));
        assert!(!Failed { scene: 1 }.can_transition_to(&Done));
    }

    #[test]
    fn test_terminal_states() {
        assert!(Done.is_terminal());
        assert!(Failed { scene: 4 }.is_terminal());
        assert!(!NotStarted.is_terminal());
        assert!(!GeneratingScene(1).is_terminal());
    }
}
