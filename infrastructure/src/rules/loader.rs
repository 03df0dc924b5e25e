//! TOML rule file loader
//!
//! A rule file replaces the built-in keyword table. It must define every
//! quadrant; anything the domain [`RuleSet`] rejects is reported here, at
//! load time, instead of surfacing during scoring.
//!
//! ```toml
//! [[rules]]
//! quadrant = "A"
//! description = "launch blockers"
//!
//! [[rules.categories]]
//! category = "blocker"
//! weight = 3
//! keywords = ["bug", "outage"]
//! ```

use quadrant_domain::{ClassificationRule, KeywordGroup, Quadrant, RuleSet, RuleSetError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a rule file
#[derive(Error, Debug)]
pub enum RuleLoadError {
    #[error("Could not read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse rule file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid rule set: {0}")]
    Invalid(#[from] RuleSetError),
}

#[derive(Debug, Deserialize)]
struct FileRuleSet {
    rules: Vec<FileRule>,
}

#[derive(Debug, Deserialize)]
struct FileRule {
    quadrant: Quadrant,
    description: String,
    #[serde(default)]
    categories: Vec<FileKeywordGroup>,
}

#[derive(Debug, Deserialize)]
struct FileKeywordGroup {
    weight: u32,
    keywords: Vec<String>,
    #[serde(default)]
    category: Option<String>,
}

impl From<FileRule> for ClassificationRule {
    fn from(rule: FileRule) -> Self {
        Self {
            quadrant: rule.quadrant,
            categories: rule
                .categories
                .into_iter()
                .map(|group| KeywordGroup {
                    weight: group.weight,
                    keywords: group.keywords,
                    category: group.category,
                })
                .collect(),
            description: rule.description,
        }
    }
}

/// Loads [`RuleSet`]s from TOML
pub struct RuleFileLoader;

impl RuleFileLoader {
    /// Read, parse and validate a rule file
    pub fn load(path: impl AsRef<Path>) -> Result<RuleSet, RuleLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RuleLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::parse(&content)?;
        info!(
            "Loaded {} keywords from rule file {}",
            rules.keyword_count(),
            path.display()
        );
        Ok(rules)
    }

    /// Parse and validate rule file content
    pub fn parse(content: &str) -> Result<RuleSet, RuleLoadError> {
        let file: FileRuleSet = toml::from_str(content)?;
        let rules = file.rules.into_iter().map(ClassificationRule::from).collect();
        Ok(RuleSet::new(rules)?)
    }
}
