//! Classification parameters: use case behaviour control.
//!
//! [`ClassifyParams`] groups the static parameters that control
//! [`ClassifyTaskUseCase`](crate::use_cases::classify_task::ClassifyTaskUseCase).
//! These are application-layer concerns, not domain policy: nothing here
//! changes the classification outcome.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Classification use case parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClassifyParams {
    /// Artificial latency before classifying. Zero disables it.
    pub simulated_delay: Duration,
}

impl ClassifyParams {
    pub fn with_simulated_delay(mut self, delay: Duration) -> Self {
        self.simulated_delay = delay;
        self
    }

    pub fn with_simulated_delay_ms(self, millis: u64) -> Self {
        self.with_simulated_delay(Duration::from_millis(millis))
    }

    pub fn has_delay(&self) -> bool {
        !self.simulated_delay.is_zero()
    }
}
