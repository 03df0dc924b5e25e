//! Application-level configuration.
//!
//! - [`ClassifyParams`]: classification use case control (simulated latency)

pub mod classify_params;

pub use classify_params::ClassifyParams;
