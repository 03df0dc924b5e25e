//! Port for structured classification logging.
//!
//! Defines the [`ClassificationLogger`] trait for recording classification
//! events (title, scores, outcome) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures one
//! machine-readable record per classification (e.g. JSONL).

use serde_json::Value;

/// A structured classification event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Timestamps are added by the adapter.
pub struct ClassificationEvent {
    /// Event type identifier (e.g., "classification").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ClassificationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Flatten into a single record with `type` and `timestamp` keys.
    ///
    /// Object payloads are merged in place; any other payload is nested
    /// under `data`.
    pub fn into_record(self, timestamp: String) -> Value {
        match self.payload {
            Value::Object(mut map) => {
                map.insert("type".to_string(), Value::from(self.event_type));
                map.insert("timestamp".to_string(), Value::from(timestamp));
                Value::Object(map)
            }
            data => serde_json::json!({
                "type": self.event_type,
                "timestamp": timestamp,
                "data": data,
            }),
        }
    }
}

/// Port for logging classification events to a structured log.
///
/// The `log` method is synchronous and non-fallible: a logging failure
/// must never change the classification result.
pub trait ClassificationLogger: Send + Sync {
    /// Record a classification event.
    fn log(&self, event: ClassificationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoClassificationLogger;

impl ClassificationLogger for NoClassificationLogger {
    fn log(&self, _event: ClassificationEvent) {}
}
