//! Application layer for quadrant-triage
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ClassifyParams;
pub use ports::{
    classification_logger::{ClassificationEvent, ClassificationLogger, NoClassificationLogger},
    progress::{ClassificationProgress, NoProgress},
};
pub use use_cases::build_board::BuildBoardUseCase;
pub use use_cases::classify_task::{
    ClassifyTaskError, ClassifyTaskInput, ClassifyTaskOutput, ClassifyTaskUseCase,
};
pub use use_cases::edit_task::{EditTaskError, EditTaskUseCase, TaskEdit};
