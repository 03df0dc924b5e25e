//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod classifier;
mod logging;
mod output;

pub use classifier::FileClassifierConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use quadrant_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Delays above this are reported as a warning
const MAX_REASONABLE_DELAY_MS: u64 = 10_000;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Classifier settings
    pub classifier: FileClassifierConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Structured logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Rule files themselves are validated when they are loaded.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Empty paths
        let paths: [(&str, Option<&Path>); 2] = [
            ("classifier.rules_path", self.classifier.rules_path.as_deref()),
            (
                "logging.classification_log",
                self.logging.classification_log.as_deref(),
            ),
        ];
        for (field, path) in paths {
            if path.is_some_and(|p| p.as_os_str().is_empty()) {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    message: format!("{}: path must not be empty", field),
                });
            }
        }

        // 2. Delay sanity
        let millis = self.classifier.simulated_delay_ms;
        if millis > MAX_REASONABLE_DELAY_MS {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ExcessiveDelay { millis },
                message: format!(
                    "classifier.simulated_delay_ms: {}ms is longer than {}ms",
                    millis, MAX_REASONABLE_DELAY_MS
                ),
            });
        }

        issues
    }
}
