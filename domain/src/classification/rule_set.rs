//! Validated, immutable collection of classification rules

use super::rule::ClassificationRule;
use super::standard;
use crate::core::quadrant::Quadrant;
use thiserror::Error;

/// Errors detected while building a [`RuleSet`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("No rule defined for quadrant {0}")]
    MissingQuadrant(Quadrant),

    #[error("Quadrant {0} has more than one rule")]
    DuplicateQuadrant(Quadrant),

    #[error("Quadrant {0} has no keyword groups")]
    EmptyCategories(Quadrant),

    #[error("Quadrant {quadrant}, keyword group #{group}: weight must be positive")]
    ZeroWeight { quadrant: Quadrant, group: usize },

    #[error("Quadrant {quadrant}, keyword group #{group}: no keywords")]
    EmptyKeywords { quadrant: Quadrant, group: usize },

    #[error("Quadrant {quadrant}, keyword group #{group}: blank keyword")]
    BlankKeyword { quadrant: Quadrant, group: usize },
}

/// A keyword prepared for matching
#[derive(Debug, Clone)]
pub(crate) struct CompiledKeyword {
    pub(crate) literal: String,
    pub(crate) normalized: String,
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledGroup {
    pub(crate) weight: u32,
    pub(crate) keywords: Vec<CompiledKeyword>,
}

/// Exactly one [`ClassificationRule`] per quadrant
///
/// Built once and shared read-only. Keywords are lower-cased at
/// construction so scoring never re-normalises them.
///
/// # Example
///
/// ```
/// use quadrant_domain::{ClassificationRule, KeywordGroup, Quadrant, RuleSet, RuleSetError};
///
/// let rules: Vec<_> = Quadrant::ALL
///     .iter()
///     .map(|q| ClassificationRule::new(*q, "test").with_group(KeywordGroup::new(1, ["x"])))
///     .collect();
/// assert!(RuleSet::new(rules).is_ok());
///
/// let missing = vec![ClassificationRule::new(Quadrant::A, "only A")
///     .with_group(KeywordGroup::new(1, ["x"]))];
/// assert_eq!(
///     RuleSet::new(missing).unwrap_err(),
///     RuleSetError::MissingQuadrant(Quadrant::B)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Indexed by [`Quadrant::index`]
    rules: Vec<ClassificationRule>,
    compiled: Vec<Vec<CompiledGroup>>,
}

impl RuleSet {
    /// Validate and build a rule set.
    pub fn new(rules: Vec<ClassificationRule>) -> Result<Self, RuleSetError> {
        Self::validate(&rules)?;
        Ok(Self::compile(rules))
    }

    /// The built-in rule set.
    pub fn standard() -> Self {
        let rules = standard::rules();
        debug_assert!(Self::validate(&rules).is_ok());
        Self::compile(rules)
    }

    /// Rule for a quadrant
    pub fn rule(&self, quadrant: Quadrant) -> &ClassificationRule {
        &self.rules[quadrant.index()]
    }

    /// Rules in `A, B, C, D` order
    pub fn rules(&self) -> impl Iterator<Item = &ClassificationRule> {
        self.rules.iter()
    }

    /// Description of a quadrant
    pub fn description(&self, quadrant: Quadrant) -> &str {
        &self.rule(quadrant).description
    }

    /// Total number of keywords across all quadrants
    pub fn keyword_count(&self) -> usize {
        self.rules.iter().map(|r| r.keyword_count()).sum()
    }

    pub(crate) fn groups(&self, quadrant: Quadrant) -> &[CompiledGroup] {
        &self.compiled[quadrant.index()]
    }

    fn validate(rules: &[ClassificationRule]) -> Result<(), RuleSetError> {
        let mut seen = [false; 4];

        for rule in rules {
            let slot = &mut seen[rule.quadrant.index()];
            if *slot {
                return Err(RuleSetError::DuplicateQuadrant(rule.quadrant));
            }
            *slot = true;

            if rule.categories.is_empty() {
                return Err(RuleSetError::EmptyCategories(rule.quadrant));
            }

            for (group, category) in rule.categories.iter().enumerate() {
                let quadrant = rule.quadrant;
                if category.weight == 0 {
                    return Err(RuleSetError::ZeroWeight { quadrant, group });
                }
                if category.keywords.is_empty() {
                    return Err(RuleSetError::EmptyKeywords { quadrant, group });
                }
                if category.keywords.iter().any(|k| k.trim().is_empty()) {
                    return Err(RuleSetError::BlankKeyword { quadrant, group });
                }
            }
        }

        match Quadrant::ALL.iter().find(|q| !seen[q.index()]) {
            Some(missing) => Err(RuleSetError::MissingQuadrant(*missing)),
            None => Ok(()),
        }
    }

    fn compile(mut rules: Vec<ClassificationRule>) -> Self {
        rules.sort_by_key(|r| r.quadrant.index());

        let compiled = rules
            .iter()
            .map(|rule| {
                rule.categories
                    .iter()
                    .map(|group| CompiledGroup {
                        weight: group.weight,
                        keywords: group
                            .keywords
                            .iter()
                            .map(|k| CompiledKeyword {
                                literal: k.clone(),
                                normalized: k.to_lowercase(),
                            })
                            .collect(),
                    })
                    .collect()
            })
            .collect();

        Self { rules, compiled }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
