//! Classifier configuration from TOML (`[classifier]` section)

use quadrant_application::ClassifyParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw classifier configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    /// TOML rule file replacing the built-in rules
    pub rules_path: Option<PathBuf>,
    /// Artificial latency before classifying, in milliseconds
    pub simulated_delay_ms: u64,
}

impl FileClassifierConfig {
    /// Convert to application-layer [`ClassifyParams`]
    pub fn to_classify_params(&self) -> ClassifyParams {
        ClassifyParams::default().with_simulated_delay_ms(self.simulated_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_classifier_deserialize() {
        let toml_str = r#"
[classifier]
rules_path = "rules/indie.toml"
simulated_delay_ms = 1500
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.classifier.rules_path,
            Some(PathBuf::from("rules/indie.toml"))
        );
        assert_eq!(
            config.classifier.to_classify_params().simulated_delay,
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_default_has_no_delay() {
        let config = FileClassifierConfig::default();
        assert!(config.rules_path.is_none());
        assert!(!config.to_classify_params().has_delay());
    }
}
