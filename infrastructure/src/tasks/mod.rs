//! Task import and export.

mod exporter;
mod importer;

pub use exporter::{JsonTaskExporter, TaskExportError};
pub use importer::{JsonTaskImporter, TaskImportError};
