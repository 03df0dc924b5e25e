//! Progress reporting while a title is analysed

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quadrant_application::ClassificationProgress;
use quadrant_domain::ClassificationResult;
use quadrant_domain::util::truncate_str;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationProgress for ProgressReporter {
    fn on_analysis_start(&self, title: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Analysing");
        pb.set_message(truncate_str(title, 60).to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_analysis_complete(&self, _result: &ClassificationResult) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ClassificationProgress for SimpleProgress {
    fn on_analysis_start(&self, title: &str) {
        eprintln!("{} Analysing {}", "->".cyan(), truncate_str(title, 60));
    }

    fn on_analysis_complete(&self, result: &ClassificationResult) {
        eprintln!(
            "  {} quadrant {} ({}%)",
            "v".green(),
            result.quadrant,
            result.confidence
        );
    }
}
