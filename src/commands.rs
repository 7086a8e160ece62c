use log::debug;

use crate::classifier::{classify, Intent};
use crate::error::TaskError;
use crate::models::Task;
use crate::task_list::TaskList;
use crate::translator::{translate_deadline, translate_event, translate_todo};
use crate::ui;

/// The outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The session should end.
    pub terminate: bool,
    /// The task list changed and should be saved.
    pub changed: bool,
    /// What to show the user.
    pub text: String,
}

impl Reply {
    fn show(text: impl Into<String>) -> Self {
        Self { terminate: false, changed: false, text: text.into() }
    }

    fn changed(text: impl Into<String>) -> Self {
        Self { terminate: false, changed: true, text: text.into() }
    }
}

/// Classifies `input`, applies it to `tasks` and describes what happened.
///
/// A failed command leaves `tasks` untouched.
pub fn process_input(input: &str, tasks: &mut TaskList) -> Result<Reply, TaskError> {
    let intent = classify(input);
    debug!("input classified as {:?}", intent);

    match intent {
        Intent::Exit => Ok(cmd_bye()),
        Intent::List => Ok(cmd_list(tasks)),
        Intent::MarkDone => cmd_done(input, tasks),
        Intent::Delete => cmd_delete(input, tasks),
        Intent::Clear => Ok(cmd_nuke(tasks)),
        Intent::Find => Ok(cmd_find(input, tasks)),
        Intent::Todo => Ok(cmd_add(translate_todo(input)?, tasks)),
        Intent::Deadline => Ok(cmd_add(translate_deadline(input)?, tasks)),
        Intent::Event => Ok(cmd_add(translate_event(input)?, tasks)),
        Intent::Invalid => Err(TaskError::UndecipherableMessage),
    }
}

fn cmd_bye() -> Reply {
    Reply { terminate: true, changed: false, text: ui::FAREWELL.into() }
}

fn cmd_list(tasks: &TaskList) -> Reply {
    if tasks.is_empty() {
        Reply::show(ui::EMPTY_LIST)
    } else {
        Reply::show(ui::listing(&tasks.to_string()))
    }
}

fn cmd_done(input: &str, tasks: &mut TaskList) -> Result<Reply, TaskError> {
    let index = parse_index(input, "done")?;
    let task = tasks.mark_done(index)?.clone();
    Ok(Reply::changed(ui::task_done(&task, tasks.len())))
}

fn cmd_delete(input: &str, tasks: &mut TaskList) -> Result<Reply, TaskError> {
    let index = parse_index(input, "delete")?;
    let task = tasks.delete_at(index)?;
    Ok(Reply::changed(ui::task_deleted(&task, tasks.len())))
}

fn cmd_nuke(tasks: &mut TaskList) -> Reply {
    tasks.clear();
    Reply::changed(ui::CLEARED)
}

fn cmd_find(input: &str, tasks: &TaskList) -> Reply {
    let term = input.get(4..).unwrap_or_default().trim();
    let found: Vec<String> = tasks
        .matching(term)
        .map(|(i, t)| format!("{}. {}", i, t))
        .collect();

    if found.is_empty() {
        Reply::show(ui::NO_MATCHES)
    } else {
        Reply::show(ui::matches(&found.join("\n")))
    }
}

fn cmd_add(task: Task, tasks: &mut TaskList) -> Reply {
    let text = ui::task_added(&task, tasks.len() + 1);
    tasks.add(task);
    Reply::changed(text)
}

/// Reads the 1-based index that follows the command word.
fn parse_index(input: &str, command: &str) -> Result<i64, TaskError> {
    let token = input
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| TaskError::IncompleteCommand(command.into()))?;
    token.parse().map_err(|_| TaskError::NotANumber(token.into()))
}
