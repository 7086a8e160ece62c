use thiserror::Error;

/// Everything that can go wrong while interpreting a single command.
///
/// None of these are fatal: the session shows the message and keeps reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("The description of a task cannot be empty.")]
    NoDescription,
    #[error("The '{0}' command is incomplete. Check its format and try again.")]
    IncompleteCommand(String),
    #[error("There is no day 0 in any month.")]
    DayZero,
    #[error("There is no month 0. Months go from 1 to 12.")]
    MonthZero,
    #[error("There are only 12 months in a year.")]
    MonthTooBig,
    #[error("{0} does not have that many days.")]
    DayTooBig(String),
    #[error("Hours must be between 00 and 23.")]
    HourOutOfBounds,
    #[error("Minutes must be between 00 and 59.")]
    MinuteOutOfBounds,
    #[error("'{0}' is not a number.")]
    NotANumber(String),
    #[error("There is no task {index}. The list has {size} task(s).")]
    IndexOutOfRange { index: i64, size: usize },
    #[error("Sorry, I don't know what that means.")]
    UndecipherableMessage,
}

/// Failures while reading or writing the task file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access task file: {0}")]
    Io(#[from] std::io::Error),
    #[error("task file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
