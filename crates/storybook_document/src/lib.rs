//! Document assembly for Storybook.
//!
//! Turns a finished [`StoryExecution`](storybook_interface::StoryExecution)
//! into a single paginated document next to the scene images.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod markdown;

pub use markdown::{DEFAULT_DOCUMENT_NAME, DOCUMENT_TITLE, MarkdownAssembler, PAGE_BREAK};
