//! Test utilities for Storybook pipeline tests.
//!
//! This module provides mock adapters and a request helper.

pub mod mock_adapters;

#[allow(unused_imports)]
pub use mock_adapters::{
    ImageBehavior, InMemoryImageStore, MockImageSynthesizer, MockTextSynthesizer, RecordingObserver,
};

use storybook_core::StoryRequest;

/// Helper to create a test StoryRequest using the builder pattern.
pub fn create_test_request(scene_count: u32) -> StoryRequest {
    StoryRequest::builder()
        .story_idea("A dragon who is afraid of heights")
        .genre("fantasy")
        .audience("kids")
        .tone("lighthearted")
        .scene_count(scene_count)
        .art_style("watercolor")
        .build()
        .expect("Failed to build test request")
}
