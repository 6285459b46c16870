use std::path::{Path, PathBuf};

use failure::Error;
use structopt::StructOpt;

use crate::config::Config;
use crate::manager::{FailurePolicy, Prioritized, TaskManager};
use crate::tasklist::TaskList;

mod execute;
mod prioritize;
mod score;

pub use self::execute::Execute;
pub use self::prioritize::Prioritize;
pub use self::score::Score;

#[derive(StructOpt, Debug)]
#[structopt(name = "tkp")]
/// tkp orders a list of tasks by priority. Each task's score is its importance times its urgency,
/// adjusted for the project's complexity, the task's technical debt and whether it introduces a
/// new pattern. Task lists are TOML files with a `[[tasks]]` table per task and an optional
/// `[context]` table.
pub struct TKPArgs {
    #[structopt(long = "config", parse(from_os_str))]
    /// Use this config file instead of the default one
    pub config: Option<PathBuf>,

    #[structopt(subcommand)]
    pub cmd: TKPCmd,
}

impl TKPArgs {
    /// Convenience function so we don't have to import structopt trait into main.rs
    pub fn get_args() -> TKPArgs {
        TKPArgs::from_args()
    }
}

// --- subcommand enum

#[derive(StructOpt, Debug)]
pub enum TKPCmd {
    #[structopt(name = "prioritize")]
    /// List the tasks in priority order.
    Prioritize(Prioritize),

    #[structopt(name = "execute")]
    /// List the tasks in priority order and mark them as executed.
    Execute(Execute),

    #[structopt(name = "score")]
    /// Show the score of each task, in file order.
    Score(Score),
}

impl TKPCmd {
    pub fn dispatch(&self, config: &Config) -> Result<Vec<String>, Error> {
        match self {
            TKPCmd::Prioritize(cmd) => cmd.run(config),
            TKPCmd::Execute(cmd) => cmd.run(config),
            TKPCmd::Score(cmd) => cmd.run(config),
        }
    }
}

pub trait Subcommand {
    fn run(&self, config: &Config) -> Result<Vec<String>, Error>;
}

/// Parse a failure policy from a command line argument
fn parse_policy(arg: &str) -> Result<FailurePolicy, Error> {
    arg.parse()
}

/// Read the task list at `path` and set up a manager for it. `policy` overrides the configured
/// policy.
fn load_manager(path: &Path, policy: Option<FailurePolicy>, config: &Config) -> Result<TaskManager, Error> {
    let list = TaskList::from_path(path)?;
    let (_, manager) = list.into_manager(&config.default_context, policy.unwrap_or(config.policy));
    Ok(manager)
}

fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// One row per task: rank, score, name. Scores are shown as "-" if the ordering was abandoned.
fn format_rows(prioritized: &Prioritized) -> Vec<String> {
    let mut output = Vec::with_capacity(prioritized.len() + 2);

    if let Some(err) = prioritized.fallback() {
        output.push(format!("Scoring failed, tasks left in original order: {}", err));
    }
    output.push("Rank\tScore\tTask".to_string());

    for (i, task) in prioritized.tasks().iter().enumerate() {
        let score = prioritized.scores().get(i)
            .map(|s| format_score(*s))
            .unwrap_or_else(|| "-".to_string());
        output.push(format!("{}\t{}\t{}", i + 1, score, display_name(&task.borrow())));
    }

    output
}

fn display_name(task: &crate::task::Task) -> String {
    task.name().unwrap_or("<unnamed>").to_string()
}
