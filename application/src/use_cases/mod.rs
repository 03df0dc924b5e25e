//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_board;
pub mod classify_task;
pub mod edit_task;
