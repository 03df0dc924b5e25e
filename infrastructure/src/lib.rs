//! Infrastructure layer for quadrant-triage
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and rule file loading.

pub mod config;
pub mod logging;
pub mod rules;
pub mod tasks;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileClassifierConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use logging::JsonlClassificationLogger;
pub use rules::{RuleFileLoader, RuleLoadError};
pub use tasks::{JsonTaskExporter, JsonTaskImporter, TaskExportError, TaskImportError};
