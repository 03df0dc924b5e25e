//! Keyword-based quadrant classification.
//!
//! - [`rule`]: weighted keyword groups and per-quadrant rules
//! - [`rule_set::RuleSet`]: validated, immutable rule table
//! - [`classifier::QuadrantClassifier`]: the scoring engine
//! - [`result`]: classification output and score breakdown

pub mod classifier;
pub mod result;
pub mod rule;
pub mod rule_set;
mod standard;

pub use classifier::{
    CONFIDENCE_CAP, FALLBACK_CONFIDENCE, FALLBACK_QUADRANT, MAX_CITED_KEYWORDS, QuadrantClassifier,
};
pub use result::{ClassificationResult, QuadrantScores};
pub use rule::{ClassificationRule, KeywordGroup};
pub use rule_set::{RuleSet, RuleSetError};
