//! Tasks and the quadrant board.

pub mod board;
pub mod entities;

pub use board::TaskBoard;
pub use entities::{NewTask, Task, TaskUpdate, parse_flag};
