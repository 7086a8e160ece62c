//! Everything the user reads: fixed messages, reply templates and the box
//! replies are drawn in.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use crate::models::Task;

pub const GREETING: &str = "Hello! I'm TaskTalk.\nWhat can I do for you?";
pub const FAREWELL: &str = "Bye. Hope to see you again soon!";
pub const EMPTY_LIST: &str = "Your task list is empty.";
pub const CLEARED: &str = "All tasks have been removed.";
pub const NO_MATCHES: &str = "No matching tasks found.";

pub fn task_added(task: &Task, size: usize) -> String {
    format!("Got it. I've added this task:\n  {}\n{}", task, count_line(size))
}

pub fn task_done(task: &Task, size: usize) -> String {
    format!("Nice! I've marked this task as done:\n  {}\n{}", task, count_line(size))
}

pub fn task_deleted(task: &Task, size: usize) -> String {
    format!("Noted. I've removed this task:\n  {}\n{}", task, count_line(size))
}

pub fn listing(body: &str) -> String {
    format!("Here are the tasks in your list:\n{}", body)
}

pub fn matches(body: &str) -> String {
    format!("Here are the matching tasks in your list:\n{}", body)
}

fn count_line(size: usize) -> String {
    let noun = if size == 1 { "task" } else { "tasks" };
    format!("Now you have {} {} in the list.", size, noun)
}

/// Draws `text` inside a single-cell box.
pub fn render(text: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .add_row(vec![Cell::new(text)]);
    table.to_string()
}
