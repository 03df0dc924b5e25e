//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for classification results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Quadrant, confidence, reasoning and score breakdown (default)
    #[default]
    Full,
    /// One line per result
    Plain,
    /// JSON output
    Json,
}
