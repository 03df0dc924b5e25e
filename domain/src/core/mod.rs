//! Core domain concepts shared across all subdomains.
//!
//! - [`quadrant::Quadrant`]: the four Eisenhower quadrants and their flags
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod quadrant;
