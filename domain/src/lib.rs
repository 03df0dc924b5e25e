//! Domain layer for quadrant-triage
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quadrant
//!
//! Tasks are arranged into four Eisenhower quadrants:
//!
//! - **A: Ship Now**: urgent and important
//! - **B: Validate / Grow**: important only
//! - **C: Delegate / Automate**: urgent only
//! - **D: Drop**: neither
//!
//! ## Classification
//!
//! [`QuadrantClassifier`] suggests a quadrant for a task title by scoring
//! weighted keyword groups from an immutable [`RuleSet`]. It is a
//! deterministic rule engine with no I/O.

pub mod classification;
pub mod config;
pub mod core;
pub mod task;
pub mod util;

// Re-export commonly used types
pub use classification::{
    ClassificationResult, ClassificationRule, KeywordGroup, QuadrantClassifier, QuadrantScores,
    RuleSet, RuleSetError,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    quadrant::{Quadrant, QuadrantFlags},
};
pub use task::{NewTask, Task, TaskBoard, TaskUpdate, parse_flag};
