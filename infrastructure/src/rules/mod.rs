//! Rule file loading.
//!
//! Provides [`RuleFileLoader`], which builds a validated
//! [`RuleSet`](quadrant_domain::RuleSet) from a TOML file.

mod loader;

pub use loader::{RuleFileLoader, RuleLoadError};
