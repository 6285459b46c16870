use toml::Value;

use crate::context::Context;
use crate::task::{SharedTask, Task};

/// Fraction of the score removed per unit of technical debt.
pub const DEBT_PENALTY_PER_UNIT: f64 = 0.05;
/// Multiplier for tasks that introduce a new pattern.
pub const NEW_PATTERN_BONUS: f64 = 1.2;

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum ScoreError {
    #[fail(display = "Field '{}' should be {} but was a {}.", field, expected, found)]
    InvalidField {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[fail(display = "Field '{}' is not a finite number: {}.", field, value)]
    NonFinite {
        field: String,
        value: f64,
    },

    #[fail(display = "Task is being modified elsewhere and cannot be scored.")]
    Unavailable,
}

impl ScoreError {
    pub(crate) fn invalid(field: &str, expected: &'static str, found: &Value) -> ScoreError {
        ScoreError::InvalidField {
            field: field.to_string(),
            expected,
            found: found.type_str().to_string(),
        }
    }
}

/// Compute the priority score of `task` under `context`. Higher scores are executed first.
///
/// The score is the product of
/// - the base priority, `importance * urgency`
/// - the complexity factor from `context` (1.3 complex, 0.8 simple, 1.0 otherwise)
/// - the debt penalty, `1 - 0.05 * technical_debt`
/// - the learning bonus, 1.2 if the task introduces a new pattern
///
/// The debt penalty is not clamped, so a task with 20 or more units of debt scores zero or
/// negative. Absent attributes take their defaults; an attribute of the wrong type is an error.
/// Neither input is modified.
pub fn score(task: &Task, context: &Context) -> Result<f64, ScoreError> {
    let base_priority = task.importance()? * task.urgency()?;
    let complexity_factor = context.project_complexity().factor();
    let debt_penalty = 1.0 - task.technical_debt()? * DEBT_PENALTY_PER_UNIT;
    let learning_bonus = if task.introduces_new_pattern()? { NEW_PATTERN_BONUS } else { 1.0 };

    Ok(base_priority * complexity_factor * debt_penalty * learning_bonus)
}

/// `score` for a shared task. Fails with `ScoreError::Unavailable` if the task is mutably
/// borrowed.
pub fn score_shared(task: &SharedTask, context: &Context) -> Result<f64, ScoreError> {
    let task = task.try_borrow().map_err(|_| ScoreError::Unavailable)?;
    score(&task, context)
}
