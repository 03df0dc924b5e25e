//! Keyword-weighted quadrant classifier
//!
//! Maps a free-text task title to a [`Quadrant`] with a confidence
//! percentage and a short reasoning sentence.
//!
//! # Algorithm
//!
//! 1. Lower-case the title.
//! 2. For every quadrant, add a group's weight for each of its keywords
//!    found as a substring. Distinct keywords stack; there is no cap.
//! 3. The quadrant with the highest score wins. Ties go to the first
//!    quadrant in `A, B, C, D` order.
//! 4. Confidence is `round(min(95, max / total * 100))`.
//! 5. When nothing matches, the result is quadrant D at 30%.
//!
//! The classifier is pure: the same title always yields the same result,
//! and it is safe to share across threads.

use super::result::{ClassificationResult, QuadrantScores};
use super::rule_set::RuleSet;
use crate::core::quadrant::Quadrant;
use std::sync::Arc;

/// Quadrant used when no keyword matches
pub const FALLBACK_QUADRANT: Quadrant = Quadrant::D;

/// Confidence reported when no keyword matches
pub const FALLBACK_CONFIDENCE: u8 = 30;

/// Upper bound on reported confidence
pub const CONFIDENCE_CAP: u8 = 95;

/// Maximum number of matched keywords cited in the reasoning
pub const MAX_CITED_KEYWORDS: usize = 3;

/// Deterministic rule-based classifier
///
/// # Example
///
/// ```
/// use quadrant_domain::{Quadrant, QuadrantClassifier};
///
/// let classifier = QuadrantClassifier::standard();
/// let result = classifier.classify("決済バグ修正");
/// assert_eq!(result.quadrant, Quadrant::A);
/// assert_eq!(result.confidence, 95);
///
/// let fallback = classifier.classify("");
/// assert_eq!(fallback.quadrant, Quadrant::D);
/// assert_eq!(fallback.confidence, 30);
/// ```
#[derive(Debug, Clone)]
pub struct QuadrantClassifier {
    rules: Arc<RuleSet>,
}

impl QuadrantClassifier {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// Classifier over the built-in rule set
    pub fn standard() -> Self {
        Self::new(Arc::new(RuleSet::standard()))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify a task title. Never fails.
    pub fn classify(&self, title: &str) -> ClassificationResult {
        self.classify_with_scores(title).0
    }

    /// Classify a task title and return the score breakdown the result was
    /// derived from, in a single pass.
    pub fn classify_with_scores(&self, title: &str) -> (ClassificationResult, QuadrantScores) {
        let normalized = title.to_lowercase();
        let scores = self.score_normalized(&normalized);
        let max = scores.max();

        if max == 0 {
            let result = ClassificationResult {
                quadrant: FALLBACK_QUADRANT,
                confidence: FALLBACK_CONFIDENCE,
                reasoning: self.fallback_reasoning(title),
            };
            return (result, scores);
        }

        let quadrant = scores.leader();
        let result = ClassificationResult {
            quadrant,
            confidence: confidence(max, scores.total()),
            reasoning: self.reasoning(quadrant, &normalized),
        };
        (result, scores)
    }

    /// Per-quadrant scores for a title
    pub fn score(&self, title: &str) -> QuadrantScores {
        self.score_normalized(&title.to_lowercase())
    }

    /// Keywords of `quadrant` found in `title`, in rule order
    pub fn matched_keywords(&self, quadrant: Quadrant, title: &str) -> Vec<&str> {
        self.matches(quadrant, &title.to_lowercase())
    }

    fn score_normalized(&self, normalized: &str) -> QuadrantScores {
        let mut scores = QuadrantScores::default();
        for quadrant in Quadrant::ALL {
            for group in self.rules.groups(quadrant) {
                for keyword in &group.keywords {
                    if normalized.contains(keyword.normalized.as_str()) {
                        scores.add(quadrant, group.weight);
                    }
                }
            }
        }
        scores
    }

    fn matches(&self, quadrant: Quadrant, normalized: &str) -> Vec<&str> {
        self.rules
            .groups(quadrant)
            .iter()
            .flat_map(|group| group.keywords.iter())
            .filter(|keyword| normalized.contains(keyword.normalized.as_str()))
            .map(|keyword| keyword.literal.as_str())
            .collect()
    }

    fn reasoning(&self, quadrant: Quadrant, normalized: &str) -> String {
        let description = self.rules.description(quadrant);
        let matched = self.matches(quadrant, normalized);

        if matched.is_empty() {
            return format!(
                "Classified as quadrant {} ({}) by rule analysis.",
                quadrant, description
            );
        }

        let cited = matched
            .iter()
            .take(MAX_CITED_KEYWORDS)
            .map(|k| format!("\"{}\"", k))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Based on matched terms {}, classified as quadrant {} ({}).",
            cited, quadrant, description
        )
    }

    fn fallback_reasoning(&self, title: &str) -> String {
        format!(
            "No classification keywords matched \"{}\", so it was classified as quadrant {} ({}).",
            title.trim(),
            FALLBACK_QUADRANT,
            self.rules.description(FALLBACK_QUADRANT)
        )
    }
}

impl Default for QuadrantClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

fn confidence(max: u64, total: u64) -> u8 {
    if total == 0 {
        return FALLBACK_CONFIDENCE;
    }
    let ratio = max as f64 / total as f64 * 100.0;
    ratio.min(f64::from(CONFIDENCE_CAP)).round() as u8
}
