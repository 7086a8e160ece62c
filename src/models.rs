use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A point in time where the date, the time of day, or both may be missing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskDateTime {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl TaskDateTime {
    pub fn new(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Self {
        Self { date, time }
    }

    /// Returns `true` when neither a date nor a time was given.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }
}

impl fmt::Display for TaskDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.date, self.time) {
            (Some(d), Some(t)) => write!(f, "{} {}", d.format("%-d %b %Y"), t.format("%H:%M")),
            (Some(d), None) => write!(f, "{}", d.format("%-d %b %Y")),
            (None, Some(t)) => write!(f, "{}", t.format("%H:%M")),
            (None, None) => f.write_str("unspecified"),
        }
    }
}

/// The start and end of an event. No ordering between the two is enforced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSpan {
    pub start: TaskDateTime,
    pub end: TaskDateTime,
}

impl TaskSpan {
    pub fn new(start: TaskDateTime, end: TaskDateTime) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for TaskSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.end.is_empty() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} to {}", self.start, self.end)
        }
    }
}

/// What kind of task this is, along with any timing it carries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskKind {
    Todo,
    Deadline { by: TaskDateTime },
    Event { at: TaskSpan },
}

/// Represents a single task in the task list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// The description the user typed.
    pub description: String,
    /// Whether the task has been completed.
    #[serde(default)]
    pub done: bool,
    #[serde(flatten)]
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self { description: description.into(), done: false, kind: TaskKind::Todo }
    }

    pub fn deadline(description: impl Into<String>, by: TaskDateTime) -> Self {
        Self { description: description.into(), done: false, kind: TaskKind::Deadline { by } }
    }

    pub fn event(description: impl Into<String>, at: TaskSpan) -> Self {
        Self { description: description.into(), done: false, kind: TaskKind::Event { at } }
    }

    /// One-letter tag shown in listings.
    pub fn tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.tag(), mark, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { at } => write!(f, " (at: {})", at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> TaskDateTime {
        TaskDateTime::new(NaiveDate::from_ymd_opt(y, m, d), NaiveTime::from_hms_opt(h, min, 0))
    }

    #[test]
    fn test_todo_display() {
        let mut t = Task::todo("read book");
        assert_eq!(t.to_string(), "[T][ ] read book");
        t.done = true;
        assert_eq!(t.to_string(), "[T][X] read book");
    }

    #[test]
    fn test_deadline_display() {
        let t = Task::deadline("submit", dt(2023, 12, 2, 18, 0));
        assert_eq!(t.to_string(), "[D][ ] submit (by: 2 Dec 2023 18:00)");

        let t = Task::deadline("submit", TaskDateTime::default());
        assert_eq!(t.to_string(), "[D][ ] submit (by: unspecified)");
    }

    #[test]
    fn test_event_display() {
        let span = TaskSpan::new(dt(2020, 1, 1, 10, 0), dt(2020, 1, 1, 11, 0));
        let t = Task::event("meeting", span);
        assert_eq!(t.to_string(), "[E][ ] meeting (at: 1 Jan 2020 10:00 to 1 Jan 2020 11:00)");

        let start_only = TaskSpan::new(TaskDateTime::new(None, NaiveTime::from_hms_opt(9, 5, 0)), TaskDateTime::default());
        let t = Task::event("standup", start_only);
        assert_eq!(t.to_string(), "[E][ ] standup (at: 09:05)");
    }

    #[test]
    fn test_serde_shape() {
        let t = Task::deadline("submit", dt(2023, 12, 2, 18, 0));
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["type"], "deadline");
        assert_eq!(json["description"], "submit");
        assert_eq!(json["by"]["date"], "2023-12-02");

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, t);
    }
}
