//! JSON task importer
//!
//! Reads an exported `tasks` table: a JSON array of rows with
//! `id`, `title`, `urgent`, `important`, `quadrant` (nullable) and
//! `created_at`.

use quadrant_domain::Task;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while importing tasks
#[derive(Error, Debug)]
pub enum TaskImportError {
    #[error("Could not read task file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse tasks: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads task rows exported as JSON
pub struct JsonTaskImporter;

impl JsonTaskImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Task>, TaskImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| TaskImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tasks = Self::from_reader(std::io::BufReader::new(file))?;
        debug!("Imported {} tasks from {}", tasks.len(), path.display());
        Ok(tasks)
    }

    pub fn from_reader(reader: impl Read) -> Result<Vec<Task>, TaskImportError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
