//! Configuration file loading for quadrant-triage
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUADRANT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quadrant.toml` or `./.quadrant.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quadrant-triage/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileClassifierConfig, FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
