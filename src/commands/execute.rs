use std::path::PathBuf;

use failure::Error;
use structopt::StructOpt;

use crate::config::Config;
use crate::manager::FailurePolicy;

use super::{format_rows, load_manager, parse_policy, Subcommand};

#[derive(StructOpt, Debug)]
pub struct Execute {
    #[structopt(parse(from_os_str))]
    /// The task list file
    pub file: PathBuf,

    #[structopt(long = "policy", parse(try_from_str = parse_policy))]
    /// "strict" to fail on the first invalid task, "tolerant" to keep going
    pub policy: Option<FailurePolicy>,
}

impl Subcommand for Execute {
    fn run(&self, config: &Config) -> Result<Vec<String>, Error> {
        let manager = load_manager(&self.file, self.policy, config)?;

        let executed = manager.execute()
            .map_err(|e| format_err!("Could not execute tasks. {}", e))?;

        if executed.tasks().is_empty() {
            return Ok(vec!["No tasks.".to_string()]);
        }

        let mut output = format_rows(executed.prioritized());
        for skipped in executed.skipped() {
            output.push(format!("Skipped: {}", skipped));
        }
        output.push(format!("{} of {} tasks marked executed.",
                            executed.executed_count(), executed.tasks().len()));

        Ok(output)
    }
}
