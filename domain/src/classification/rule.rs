//! Classification rules: weighted keyword groups per quadrant

use crate::core::quadrant::Quadrant;
use serde::{Deserialize, Serialize};

/// A weighted list of keywords belonging to one quadrant
///
/// Every keyword found in a title adds `weight` to the quadrant's score.
/// Matching is a case-insensitive substring test; the literal spelling is
/// kept for reasoning output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub weight: u32,
    pub keywords: Vec<String>,
    /// Only used for explanation text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl KeywordGroup {
    pub fn new<I, S>(weight: u32, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            weight,
            keywords: keywords.into_iter().map(Into::into).collect(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// The rule for a single quadrant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub quadrant: Quadrant,
    /// Keyword groups, in the order used when citing matched keywords
    pub categories: Vec<KeywordGroup>,
    /// Human-readable summary of the quadrant, used in reasoning text
    pub description: String,
}

impl ClassificationRule {
    pub fn new(quadrant: Quadrant, description: impl Into<String>) -> Self {
        Self {
            quadrant,
            categories: Vec::new(),
            description: description.into(),
        }
    }

    pub fn with_group(mut self, group: KeywordGroup) -> Self {
        self.categories.push(group);
        self
    }

    /// Total number of keywords across all groups
    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|g| g.keywords.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let rule = ClassificationRule::new(Quadrant::A, "blockers")
            .with_group(KeywordGroup::new(3, ["bug", "crash"]).with_category("blocker"))
            .with_group(KeywordGroup::new(2, ["deploy"]));

        assert_eq!(rule.quadrant, Quadrant::A);
        assert_eq!(rule.categories.len(), 2);
        assert_eq!(rule.categories[0].category.as_deref(), Some("blocker"));
        assert_eq!(rule.categories[1].category, None);
        assert_eq!(rule.keyword_count(), 3);
    }

    #[test]
    fn test_group_serializes_without_empty_category() {
        let group = KeywordGroup::new(1, ["idea"]);
        let json = serde_json::to_value(&group).unwrap();
        assert!(json.get("category").is_none());
        assert_eq!(json["weight"], 1);
    }
}
