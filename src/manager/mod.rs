use std::cmp::Ordering;
use std::str::FromStr;

use failure::Error;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::Context;
use crate::priority::{score_shared, ScoreError};
use crate::task::SharedTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// What a `TaskManager` does when a task cannot be scored or flagged.
pub enum FailurePolicy {
    /// Return the first error to the caller.
    Strict,
    /// Keep going: a scoring failure leaves the tasks in their original order, and a task that
    /// cannot be flagged is skipped. Every suppressed error is logged and reported in the
    /// returned `Prioritized`/`Executed`.
    Tolerant,
}

impl Default for FailurePolicy {
    fn default() -> FailurePolicy {
        FailurePolicy::Strict
    }
}

impl FromStr for FailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(FailurePolicy::Strict),
            "tolerant" => Ok(FailurePolicy::Tolerant),
            other => Err(format_err!("Unknown failure policy \"{}\", expected \"strict\" or \"tolerant\".", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Fail)]
#[fail(display = "Could not mark task at position {} as executed: it is borrowed elsewhere.", position)]
pub struct FlagError {
    /// Position of the task in the prioritized order.
    pub position: usize,
}

#[derive(Debug, Clone)]
/// Tasks in the order they should be executed.
pub struct Prioritized {
    tasks: Vec<SharedTask>,
    scores: Vec<f64>,
    fallback: Option<ScoreError>,
}

impl Prioritized {
    /// The ordered tasks. These alias the manager's tasks.
    pub fn tasks(&self) -> &[SharedTask] {
        &self.tasks
    }

    /// Score of each task, in the same order as `tasks`. Empty if scoring was abandoned.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// The scoring error that made a tolerant manager keep the original order, if any.
    pub fn fallback(&self) -> Option<&ScoreError> {
        self.fallback.as_ref()
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn into_tasks(self) -> Vec<SharedTask> {
        self.tasks
    }
}

#[derive(Debug, Clone)]
/// Result of `TaskManager::execute`: the prioritized tasks, and the ones that could not be
/// flagged.
pub struct Executed {
    prioritized: Prioritized,
    skipped: Vec<FlagError>,
}

impl Executed {
    pub fn prioritized(&self) -> &Prioritized {
        &self.prioritized
    }

    pub fn tasks(&self) -> &[SharedTask] {
        self.prioritized.tasks()
    }

    /// Tasks left unflagged by a tolerant manager. Always empty for a strict one.
    pub fn skipped(&self) -> &[FlagError] {
        &self.skipped
    }

    /// Number of tasks flagged by this call.
    pub fn executed_count(&self) -> usize {
        self.prioritized.len() - self.skipped.len()
    }

    pub fn into_tasks(self) -> Vec<SharedTask> {
        self.prioritized.into_tasks()
    }
}

/// Holds a fixed list of tasks and a context, and orders the tasks by priority score.
///
/// The manager keeps the `SharedTask` handles it was given. Executing flags the tasks through
/// those handles, so the caller's own handles observe the change.
#[derive(Debug, Clone)]
pub struct TaskManager {
    tasks: Vec<SharedTask>,
    context: Context,
    policy: FailurePolicy,
}

impl TaskManager {
    /// Create a manager with the `Strict` policy.
    pub fn new(tasks: Vec<SharedTask>, context: Context) -> TaskManager {
        TaskManager::with_policy(tasks, context, FailurePolicy::default())
    }

    pub fn with_policy(tasks: Vec<SharedTask>, context: Context, policy: FailurePolicy) -> TaskManager {
        TaskManager {
            tasks,
            context,
            policy,
        }
    }

    pub fn tasks(&self) -> &[SharedTask] {
        &self.tasks
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Changes apply to every later `prioritize`/`execute`.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: FailurePolicy) {
        self.policy = policy;
    }

    /// Score of every task, in input order. Errors are always returned, whatever the policy.
    pub fn score_all(&self) -> Result<Vec<f64>, Error> {
        self.tasks.iter()
            .map(|task| score_shared(task, &self.context).map_err(Error::from))
            .collect()
    }

    /// Order the tasks by descending score. Tasks with equal scores keep their input order.
    ///
    /// Under `Strict`, a task that fails to score makes this return that `ScoreError`. Under
    /// `Tolerant`, the whole ordering is abandoned instead and the tasks come back in their
    /// original order, with the error recorded in `Prioritized::fallback`.
    pub fn prioritize(&self) -> Result<Prioritized, Error> {
        match self.rank() {
            Ok((tasks, scores)) => {
                debug!(tasks = tasks.len(), "prioritized tasks");
                Ok(Prioritized {
                    tasks,
                    scores,
                    fallback: None,
                })
            }
            Err(e) => match self.policy {
                FailurePolicy::Strict => Err(e.into()),
                FailurePolicy::Tolerant => {
                    warn!(error = %e, "scoring failed, keeping original task order");
                    Ok(Prioritized {
                        tasks: self.tasks.clone(),
                        scores: Vec::new(),
                        fallback: Some(e),
                    })
                }
            },
        }
    }

    /// Prioritize, then mark every task in the result as executed.
    ///
    /// Under `Strict`, the first task that cannot be flagged stops the loop with a `FlagError`;
    /// tasks before it stay flagged. Under `Tolerant`, it is skipped and recorded in
    /// `Executed::skipped`.
    pub fn execute(&self) -> Result<Executed, Error> {
        let prioritized = self.prioritize()?;

        let mut skipped = Vec::new();
        for (position, task) in prioritized.tasks().iter().enumerate() {
            if task.mark_executed().is_ok() {
                continue;
            }

            let err = FlagError { position };
            match self.policy {
                FailurePolicy::Strict => return Err(err.into()),
                FailurePolicy::Tolerant => {
                    warn!(position, "task is borrowed elsewhere, not marked as executed");
                    skipped.push(err);
                }
            }
        }

        Ok(Executed {
            prioritized,
            skipped,
        })
    }

    fn rank(&self) -> Result<(Vec<SharedTask>, Vec<f64>), ScoreError> {
        let mut ranked = self.tasks.iter()
            .map(|task| -> Result<(SharedTask, f64), ScoreError> {
                let score = score_shared(task, &self.context)?;
                debug!(score, "scored task");
                Ok((task.clone(), score))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // sort_by is stable, so equal scores keep their input order
        ranked.sort_by(|(_, a), (_, b)| descending(*a, *b));

        Ok(ranked.into_iter().unzip())
    }
}

/// Order scores from highest to lowest. NaN (only reachable through overflow) sorts last.
fn descending(a: f64, b: f64) -> Ordering {
    match b.partial_cmp(&a) {
        Some(ordering) => ordering,
        None => a.is_nan().cmp(&b.is_nan()),
    }
}

#[cfg(test)]
mod tests;
