//! Classify Task use case.
//!
//! The caller side of the classifier: takes the title a user typed,
//! optionally waits for a configured delay, runs the
//! [`QuadrantClassifier`], and returns the result together with the
//! urgent/important flags the caller persists.

use crate::config::ClassifyParams;
use crate::ports::classification_logger::{
    ClassificationEvent, ClassificationLogger, NoClassificationLogger,
};
use crate::ports::progress::{ClassificationProgress, NoProgress};
use quadrant_domain::util::truncate_str;
use quadrant_domain::{ClassificationResult, QuadrantClassifier, QuadrantFlags, QuadrantScores};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during task classification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyTaskError {
    #[error("Task title is empty")]
    EmptyTitle,
}

/// Input for the [`ClassifyTaskUseCase`].
#[derive(Debug, Clone)]
pub struct ClassifyTaskInput {
    /// Title as typed by the user
    pub title: String,
    pub params: ClassifyParams,
}

impl ClassifyTaskInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            params: ClassifyParams::default(),
        }
    }

    pub fn with_params(mut self, params: ClassifyParams) -> Self {
        self.params = params;
        self
    }
}

/// Output of the [`ClassifyTaskUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyTaskOutput {
    pub title: String,
    pub result: ClassificationResult,
    /// Flags derived from `result.quadrant`
    pub flags: QuadrantFlags,
    pub scores: QuadrantScores,
}

/// Use case for classifying a single task title.
pub struct ClassifyTaskUseCase {
    classifier: Arc<QuadrantClassifier>,
    logger: Arc<dyn ClassificationLogger>,
}

impl Clone for ClassifyTaskUseCase {
    fn clone(&self) -> Self {
        Self {
            classifier: self.classifier.clone(),
            logger: self.logger.clone(),
        }
    }
}

impl ClassifyTaskUseCase {
    pub fn new(classifier: Arc<QuadrantClassifier>) -> Self {
        Self {
            classifier,
            logger: Arc::new(NoClassificationLogger),
        }
    }

    /// Create with a classification logger.
    pub fn with_logger(mut self, logger: Arc<dyn ClassificationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn classifier(&self) -> &QuadrantClassifier {
        &self.classifier
    }

    /// Execute without progress reporting.
    pub async fn execute(
        &self,
        input: ClassifyTaskInput,
    ) -> Result<ClassifyTaskOutput, ClassifyTaskError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        input: ClassifyTaskInput,
        progress: &dyn ClassificationProgress,
    ) -> Result<ClassifyTaskOutput, ClassifyTaskError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ClassifyTaskError::EmptyTitle);
        }

        info!("Classifying task: {}", truncate_str(title, 100));
        progress.on_analysis_start(title);

        if input.params.has_delay() {
            debug!("Simulated delay: {:?}", input.params.simulated_delay);
            tokio::time::sleep(input.params.simulated_delay).await;
        }

        let (result, scores) = self.classifier.classify_with_scores(title);
        let flags = result.flags();

        debug!(
            "Scores {} -> {} ({}%)",
            scores
                .iter()
                .map(|(q, s)| format!("{}={}", q, s))
                .collect::<Vec<_>>()
                .join(" "),
            result.quadrant,
            result.confidence
        );

        self.logger.log(ClassificationEvent::new(
            "classification",
            serde_json::json!({
                "title": title,
                "quadrant": result.quadrant,
                "confidence": result.confidence,
                "scores": scores,
                "urgent": flags.urgent,
                "important": flags.important,
            }),
        ));

        progress.on_analysis_complete(&result);

        Ok(ClassifyTaskOutput {
            title: title.to_string(),
            result,
            flags,
            scores,
        })
    }
}
