mod execution;

pub use execution::StoryExecution;
