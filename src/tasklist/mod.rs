use std::path::Path;
use std::str::FromStr;

use failure::Error;
use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::manager::{FailurePolicy, TaskManager};
use crate::task::{share_all, SharedTask, Task};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
/// A task list document: an optional `[context]` table followed by any number of `[[tasks]]`
/// tables.
///
/// ```toml
/// [context]
/// project_complexity = "complex"
///
/// [[tasks]]
/// name = "write the migration"
/// importance = 2
/// urgency = 3
/// ```
pub struct TaskList {
    #[serde(default)]
    pub context: Option<Context>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn from_path(path: &Path) -> Result<TaskList, Error> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| format_err!("Could not read task list at '{}': {}", path.display(), e))?;

        TaskList::from_str(&s)
            .map_err(|e| format_err!("Could not parse task list at '{}': {}", path.display(), e))
    }

    /// Build a manager over these tasks. The list's own context wins over `default_context`.
    ///
    /// The shared handles are returned alongside the manager so the caller can observe what the
    /// manager does to the tasks.
    pub fn into_manager(self, default_context: &Context, policy: FailurePolicy) -> (Vec<SharedTask>, TaskManager) {
        let context = self.context.unwrap_or_else(|| default_context.clone());
        let tasks = share_all(self.tasks);
        let manager = TaskManager::with_policy(tasks.clone(), context, policy);
        (tasks, manager)
    }
}

impl FromStr for TaskList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| format_err!("Error parsing task list: {}", e))
    }
}
