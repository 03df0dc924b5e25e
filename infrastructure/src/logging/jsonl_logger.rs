//! Append-only JSONL sink for classification events.
//!
//! Records are built by [`ClassificationEvent::into_record`]; this adapter
//! only stamps the time and appends one line per event.

use chrono::{SecondsFormat, Utc};
use quadrant_application::{ClassificationEvent, ClassificationLogger};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Appends classification records to a JSONL file.
///
/// Every line is flushed as soon as it is written, so the file is complete
/// even if the process exits without dropping the logger.
pub struct JsonlClassificationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlClassificationLogger {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, record: &serde_json::Value) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("classification log writer poisoned"))?;
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl ClassificationLogger for JsonlClassificationLogger {
    fn log(&self, event: ClassificationEvent) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let record = event.into_record(timestamp);

        if let Err(e) = self.append(&record) {
            warn!(
                "Could not write to classification log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_each_event_is_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classifications.jsonl");
        let logger = JsonlClassificationLogger::open(&path).unwrap();

        logger.log(ClassificationEvent::new(
            "classification",
            json!({"title": "決済バグ修正", "quadrant": "A", "confidence": 95}),
        ));
        logger.log(ClassificationEvent::new(
            "classification",
            json!({"title": "ランチ", "quadrant": "D", "confidence": 30}),
        ));

        // Flushed per line: readable while the logger is still alive
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line["type"], "classification");
            assert!(line["timestamp"].as_str().unwrap().ends_with('Z'));
        }
        assert_eq!(lines[0]["title"], "決済バグ修正");
        assert_eq!(lines[1]["confidence"], 30);
    }

    #[test]
    fn test_reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("log.jsonl");

        for quadrant in ["A", "B"] {
            JsonlClassificationLogger::open(&path)
                .unwrap()
                .log(ClassificationEvent::new(
                    "classification",
                    json!({ "quadrant": quadrant }),
                ));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["quadrant"], "B");
    }

    #[test]
    fn test_open_fails_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlClassificationLogger::open(dir.path()).is_err());
    }
}
