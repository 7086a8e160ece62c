use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{info, warn};

use crate::error::StorageError;
use crate::task_list::TaskList;

/// Where the task file lives when `--db` is not given.
///
/// `TASKS_DB` wins; otherwise `tasktalk/tasks.json` under the platform data
/// directory, or the working directory if there is none.
pub fn default_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("TASKS_DB") {
        return PathBuf::from(path);
    }
    match dirs::data_local_dir() {
        Some(data) => data.join("tasktalk").join("tasks.json"),
        None => PathBuf::from("tasks.json"),
    }
}

/// Reads and writes the task list as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved task list.
    ///
    /// A missing file is an empty list; an unreadable or malformed one is an error.
    pub fn load(&self) -> Result<TaskList, StorageError> {
        if !self.path.exists() {
            info!("no task file at {}, starting empty", self.path.display());
            return Ok(TaskList::new());
        }
        let s = fs::read_to_string(&self.path)?;
        let tasks: TaskList = serde_json::from_str(&s)?;
        info!("loaded {} task(s) from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Overwrites the task file with `tasks`, creating its directory if needed.
    pub fn save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                info!("creating data directory {}", dir.display());
                fs::create_dir_all(dir)?;
            }
        }
        let s = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, s)?;
        info!("saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Moves the current task file aside to `<file>.<timestamp>.bak` and
    /// returns the new path. The original bytes are kept untouched.
    /// An existing backup is never replaced.
    pub fn back_up(&self) -> Result<PathBuf, StorageError> {
        let stamp = Local::now().format("%Y%m%d%H%M%S").to_string();
        let backup_named = |suffix: &str| {
            let mut name = self.path.file_name().unwrap_or_default().to_os_string();
            name.push(format!(".{}{}.bak", stamp, suffix));
            self.path.with_file_name(name)
        };

        let mut backup = backup_named("");
        let mut n = 1;
        while backup.exists() {
            backup = backup_named(&format!("-{}", n));
            n += 1;
        }
        fs::rename(&self.path, &backup)?;
        warn!("moved unreadable task file {} to {}", self.path.display(), backup.display());
        Ok(backup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path() {
        std::env::set_var("TASKS_DB", "/tmp/elsewhere/tasks.json");
        assert_eq!(default_db_path(), PathBuf::from("/tmp/elsewhere/tasks.json"));
        std::env::remove_var("TASKS_DB");

        let path = default_db_path();
        assert!(path.ends_with("tasks.json"));
    }
}
