#[macro_use]
extern crate failure;

#[cfg(test)]
#[macro_use]
extern crate proptest;

pub mod commands;
pub mod config;
pub mod context;
pub mod manager;
pub mod priority;
pub mod task;
pub mod tasklist;

pub use crate::context::{Context, ProjectComplexity};
pub use crate::manager::{Executed, FailurePolicy, FlagError, Prioritized, TaskManager};
pub use crate::priority::{score, ScoreError};
pub use crate::task::{SharedTask, Task};
