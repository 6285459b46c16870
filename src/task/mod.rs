use std::cell::{BorrowError, BorrowMutError, Ref, RefCell, RefMut};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use toml::value::{Table, Value};

use crate::priority::ScoreError;

pub const IMPORTANCE: &str = "importance";
pub const URGENCY: &str = "urgency";
pub const TECHNICAL_DEBT: &str = "technical_debt";
pub const INTRODUCES_NEW_PATTERN: &str = "introduces_new_pattern";
pub const EXECUTED: &str = "executed";
pub const NAME: &str = "name";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// Task representation. A task is a set of named attributes; the scoring attributes below are
/// read with their defaults when absent, and anything else is carried along untouched.
///
/// | attribute                | type    | default |
/// |--------------------------|---------|---------|
/// | `importance`             | number  | 1       |
/// | `urgency`                | number  | 1       |
/// | `technical_debt`         | number  | 0       |
/// | `introduces_new_pattern` | boolean | false   |
///
/// A present attribute of the wrong type is an error when it is read, never silently defaulted.
pub struct Task {
    fields: Table,
}

impl Task {
    /// Create a task with no attributes, so every scoring attribute takes its default.
    pub fn new() -> Task {
        Task { fields: Table::new() }
    }

    pub fn from_table(fields: Table) -> Task {
        Task { fields }
    }

    /// Builder-style attribute setter.
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Task {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn fields(&self) -> &Table {
        &self.fields
    }

    /// Display name of the task, if it has a string `name` attribute. Not used for scoring.
    pub fn name(&self) -> Option<&str> {
        self.fields.get(NAME).and_then(Value::as_str)
    }

    pub fn importance(&self) -> Result<f64, ScoreError> {
        self.number_or(IMPORTANCE, 1.0)
    }

    pub fn urgency(&self) -> Result<f64, ScoreError> {
        self.number_or(URGENCY, 1.0)
    }

    pub fn technical_debt(&self) -> Result<f64, ScoreError> {
        self.number_or(TECHNICAL_DEBT, 0.0)
    }

    pub fn introduces_new_pattern(&self) -> Result<bool, ScoreError> {
        match self.fields.get(INTRODUCES_NEW_PATTERN) {
            None => Ok(false),
            Some(Value::Boolean(b)) => Ok(*b),
            Some(other) => Err(ScoreError::invalid(INTRODUCES_NEW_PATTERN, "a boolean", other)),
        }
    }

    /// True only if the `executed` attribute is the boolean `true`.
    pub fn is_executed(&self) -> bool {
        self.fields.get(EXECUTED).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn mark_executed(&mut self) {
        self.fields.insert(EXECUTED.to_string(), Value::Boolean(true));
    }

    fn number_or(&self, field: &str, default: f64) -> Result<f64, ScoreError> {
        match self.fields.get(field) {
            None => Ok(default),
            Some(Value::Integer(i)) => Ok(*i as f64),
            Some(Value::Float(f)) if f.is_finite() => Ok(*f),
            Some(Value::Float(f)) => Err(ScoreError::NonFinite { field: field.to_string(), value: *f }),
            Some(other) => Err(ScoreError::invalid(field, "a number", other)),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Shared handle to a `Task`.
///
/// Clones of a `SharedTask` refer to the same task: the manager's task list, the orderings it
/// produces and whatever the caller kept all see a flag set through any one of them. Nothing in
/// this crate copies the underlying task. Handles are not `Send`; a task list belongs to one
/// thread.
pub struct SharedTask(Rc<RefCell<Task>>);

impl SharedTask {
    pub fn new(task: Task) -> SharedTask {
        SharedTask(Rc::new(RefCell::new(task)))
    }

    /// Panics if the task is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, Task> {
        self.0.borrow()
    }

    /// Panics if the task is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, Task> {
        self.0.borrow_mut()
    }

    pub fn try_borrow(&self) -> Result<Ref<'_, Task>, BorrowError> {
        self.0.try_borrow()
    }

    pub fn try_borrow_mut(&self) -> Result<RefMut<'_, Task>, BorrowMutError> {
        self.0.try_borrow_mut()
    }

    /// Set `executed = true` on the shared task. Fails if someone else holds a borrow of it.
    pub fn mark_executed(&self) -> Result<(), BorrowMutError> {
        self.0.try_borrow_mut()?.mark_executed();
        Ok(())
    }

    /// Whether both handles point at the same task.
    pub fn ptr_eq(&self, other: &SharedTask) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Task> for SharedTask {
    fn from(task: Task) -> SharedTask {
        SharedTask::new(task)
    }
}

/// Wrap each task in its own `SharedTask`.
pub fn share_all<I: IntoIterator<Item = Task>>(tasks: I) -> Vec<SharedTask> {
    tasks.into_iter().map(SharedTask::new).collect()
}

#[cfg(test)]
pub(crate) mod test_utils;
