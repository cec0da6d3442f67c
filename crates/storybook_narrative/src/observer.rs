//! Progress notifications for front ends.

use storybook_core::SceneResult;

/// Receives progress events from a running pipeline.
///
/// Observers only watch; nothing they do changes the run.
pub trait SceneObserver: Send + Sync {
    /// Called before scene `scene_number` of `total` is requested.
    fn scene_started(&self, _scene_number: u32, _total: u32) {}

    /// Called after a scene has been written (and illustrated, if possible).
    fn scene_completed(&self, scene: &SceneResult, total: u32);
}

