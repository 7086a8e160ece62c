//! # TaskTalk
//!
//! A chat-style terminal task tracker. You type short commands, TaskTalk
//! works out what you meant, pulls dates and times out of the text and keeps
//! your list up to date.
//!
//! ## Commands
//!
//! | Command | Example |
//! |---|---|
//! | add a todo | `todo read book` |
//! | add a deadline | `deadline submit report /by 2/12/23 1800` |
//! | add an event | `event meeting /at 1/1/20 1000 to 1/1/20 1100` |
//! | list | `list` |
//! | mark done | `done 2` |
//! | delete | `delete 2` |
//! | search | `find book` |
//! | remove everything | `nuke` |
//! | quit | `bye` |
//!
//! Keywords are matched case-insensitively against the start of the line.
//! Dates are `D/M/Y` (a two digit year means 20xx) and times are `HHMM`.
//! Both are optional and can appear in either order.
//!
//! ## Data Storage
//!
//! Tasks are saved as JSON in your local data directory
//! (`~/.local/share/tasktalk/tasks.json` on Linux). Override it with the
//! `TASKS_DB` environment variable or `--db`.

pub mod classifier;
pub mod commands;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod task_list;
pub mod translator;
pub mod ui;
