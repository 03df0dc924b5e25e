//! JSON task exporter
//!
//! Writes tasks back in the shape [`JsonTaskImporter`](super::JsonTaskImporter)
//! reads, so an edited export can be re-imported.

use quadrant_domain::Task;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while exporting tasks
#[derive(Error, Debug)]
pub enum TaskExportError {
    #[error("Could not write task file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes task rows as a pretty-printed JSON array
pub struct JsonTaskExporter;

impl JsonTaskExporter {
    pub fn to_path(path: impl AsRef<Path>, tasks: &[Task]) -> Result<(), TaskExportError> {
        let path = path.as_ref();
        let io_error = |source| TaskExportError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = std::fs::File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        Self::to_writer(&mut writer, tasks)?;
        writer.flush().map_err(io_error)?;

        debug!("Exported {} tasks to {}", tasks.len(), path.display());
        Ok(())
    }

    pub fn to_writer(mut writer: impl Write, tasks: &[Task]) -> Result<(), TaskExportError> {
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.write_all(b"\n").map_err(serde_json::Error::io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::JsonTaskImporter;
    use quadrant_domain::Quadrant;

    const EXPORT: &str = r#"[
        {"id": "1", "title": "決済バグ修正", "urgent": true, "important": true,
         "quadrant": null, "created_at": "2025-01-10T09:00:00Z"},
        {"id": "2", "title": "読書", "created_at": "2025-01-08T09:00:00Z"}
    ]"#;

    #[test]
    fn test_edited_tasks_survive_reimport() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        let mut tasks = JsonTaskImporter::from_reader(EXPORT.as_bytes()).unwrap();
        tasks[1].move_to(Quadrant::B);
        JsonTaskExporter::to_path(&path, &tasks).unwrap();

        let reloaded = JsonTaskImporter::from_path(&path).unwrap();
        assert_eq!(reloaded, tasks);
        assert_eq!(reloaded[1].quadrant, Some(Quadrant::B));
        assert!(reloaded[1].important);
    }

    #[test]
    fn test_writes_quadrant_as_letter() {
        let mut tasks = JsonTaskImporter::from_reader(EXPORT.as_bytes()).unwrap();
        tasks[0].move_to(Quadrant::C);

        let mut out = Vec::new();
        JsonTaskExporter::to_writer(&mut out, &tasks).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["quadrant"], "C");
        assert_eq!(value[0]["urgent"], true);
        assert_eq!(value[0]["important"], false);
        assert_eq!(value[1]["quadrant"], serde_json::Value::Null);
    }

    #[test]
    fn test_unwritable_path() {
        let err = JsonTaskExporter::to_path("/nonexistent/dir/tasks.json", &[]).unwrap_err();
        assert!(matches!(err, TaskExportError::Io { .. }));
    }
}
