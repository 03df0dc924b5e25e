//! Build Board use case
//!
//! Groups stored tasks into the four quadrants. A stored quadrant always
//! wins; rows without one are placed by their urgent/important flags.

use quadrant_domain::{Quadrant, Task, TaskBoard};
use tracing::{debug, info};

/// Use case for arranging tasks into the Eisenhower board
#[derive(Debug, Clone, Default)]
pub struct BuildBoardUseCase;

impl BuildBoardUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, tasks: Vec<Task>) -> TaskBoard {
        let derived = tasks.iter().filter(|t| t.quadrant.is_none()).count();
        let board = TaskBoard::from_tasks(tasks);

        info!(
            "Built board with {} tasks ({} derived from flags)",
            board.len(),
            derived
        );
        for quadrant in Quadrant::ALL {
            debug!("Quadrant {}: {} tasks", quadrant, board.count(quadrant));
        }

        board
    }
}
