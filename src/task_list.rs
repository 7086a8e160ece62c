use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TaskError;
use crate::models::Task;

/// The ordered list of tasks owned by a session.
///
/// Positions exposed to users are 1-based.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Appends a task to the end of the list.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Marks the task at 1-based `index` as done and returns it.
    ///
    /// Marking an already finished task is allowed.
    pub fn mark_done(&mut self, index: i64) -> Result<&Task, TaskError> {
        let i = self.position(index)?;
        let task = &mut self.tasks[i];
        task.done = true;
        Ok(&*task)
    }

    /// Removes the task at 1-based `index`; later tasks move up by one.
    pub fn delete_at(&mut self, index: i64) -> Result<Task, TaskError> {
        let i = self.position(index)?;
        Ok(self.tasks.remove(i))
    }

    /// Removes every task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Tasks whose description contains `term`, with their 1-based positions.
    pub fn matching<'a>(&'a self, term: &'a str) -> impl Iterator<Item = (usize, &'a Task)> + 'a {
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.description.contains(term))
            .map(|(i, t)| (i + 1, t))
    }

    fn position(&self, index: i64) -> Result<usize, TaskError> {
        usize::try_from(index)
            .ok()
            .filter(|i| (1..=self.tasks.len()).contains(i))
            .map(|i| i - 1)
            .ok_or(TaskError::IndexOutOfRange { index, size: self.tasks.len() })
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

/// One numbered line per task.
impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, task) in self.tasks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", i + 1, task)?;
        }
        Ok(())
    }
}
