//! Progress notification port
//!
//! Defines the interface for reporting progress while a title is analysed.

use quadrant_domain::ClassificationResult;

/// Callback for progress updates during classification
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait ClassificationProgress: Send + Sync {
    /// Called before the (optional) simulated delay starts
    fn on_analysis_start(&self, title: &str);

    /// Called once the result is available
    fn on_analysis_complete(&self, result: &ClassificationResult);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ClassificationProgress for NoProgress {
    fn on_analysis_start(&self, _title: &str) {}
    fn on_analysis_complete(&self, _result: &ClassificationResult) {}
}
