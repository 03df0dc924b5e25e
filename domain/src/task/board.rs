//! Eisenhower board: tasks grouped by quadrant

use super::entities::Task;
use crate::core::quadrant::Quadrant;
use serde::Serialize;

/// Tasks bucketed into the four quadrants
///
/// Input order is preserved inside each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskBoard {
    #[serde(rename = "A")]
    a: Vec<Task>,
    #[serde(rename = "B")]
    b: Vec<Task>,
    #[serde(rename = "C")]
    c: Vec<Task>,
    #[serde(rename = "D")]
    d: Vec<Task>,
}

impl TaskBoard {
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.bucket_mut(task.effective_quadrant()).push(task);
        }
        board
    }

    pub fn tasks(&self, quadrant: Quadrant) -> &[Task] {
        match quadrant {
            Quadrant::A => &self.a,
            Quadrant::B => &self.b,
            Quadrant::C => &self.c,
            Quadrant::D => &self.d,
        }
    }

    pub fn count(&self, quadrant: Quadrant) -> usize {
        self.tasks(quadrant).len()
    }

    pub fn len(&self) -> usize {
        Quadrant::ALL.iter().map(|q| self.count(*q)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, quadrant: Quadrant) -> &mut Vec<Task> {
        match quadrant {
            Quadrant::A => &mut self.a,
            Quadrant::B => &mut self.b,
            Quadrant::C => &mut self.c,
            Quadrant::D => &mut self.d,
        }
    }
}
