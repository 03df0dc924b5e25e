//! Classification output value objects

use crate::core::quadrant::{Quadrant, QuadrantFlags};
use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

/// Outcome of classifying one task title (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct ClassificationResult {
    pub quadrant: Quadrant,
    /// Heuristic percentage in `0..=100`
    pub confidence: u8,
    pub reasoning: String,
}

impl ClassificationResult {
    /// Flags the caller persists for this result
    pub fn flags(&self) -> QuadrantFlags {
        self.quadrant.flags()
    }
}

/// Per-quadrant keyword scores for one title
///
/// Weights are `u32` but sums are kept in `u64` and saturate, so no rule
/// set can make scoring overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuadrantScores {
    scores: [u64; 4],
}

impl QuadrantScores {
    pub fn get(&self, quadrant: Quadrant) -> u64 {
        self.scores[quadrant.index()]
    }

    pub(crate) fn add(&mut self, quadrant: Quadrant, weight: u32) {
        let slot = &mut self.scores[quadrant.index()];
        *slot = slot.saturating_add(u64::from(weight));
    }

    pub fn total(&self) -> u64 {
        self.scores
            .iter()
            .fold(0u64, |total, score| total.saturating_add(*score))
    }

    pub fn max(&self) -> u64 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    /// First quadrant in `A, B, C, D` order that reaches the maximum score.
    pub fn leader(&self) -> Quadrant {
        let max = self.max();
        Quadrant::ALL
            .into_iter()
            .find(|q| self.get(*q) == max)
            .unwrap_or(Quadrant::D)
    }

    /// Quadrants sharing the maximum score, in iteration order
    pub fn tied_leaders(&self) -> Vec<Quadrant> {
        let max = self.max();
        Quadrant::ALL
            .into_iter()
            .filter(|q| self.get(*q) == max)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, u64)> + '_ {
        Quadrant::ALL.into_iter().map(|q| (q, self.get(q)))
    }
}

impl Serialize for QuadrantScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(q, score)| (q.as_str(), score)))
    }
}
