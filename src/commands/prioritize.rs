use std::path::PathBuf;

use failure::Error;
use structopt::StructOpt;

use crate::config::Config;
use crate::manager::FailurePolicy;

use super::{format_rows, load_manager, parse_policy, Subcommand};

#[derive(StructOpt, Debug)]
pub struct Prioritize {
    #[structopt(parse(from_os_str))]
    /// The task list file
    pub file: PathBuf,

    #[structopt(long = "policy", parse(try_from_str = parse_policy))]
    /// "strict" to fail on the first invalid task, "tolerant" to keep the original order instead
    pub policy: Option<FailurePolicy>,
}

impl Subcommand for Prioritize {
    fn run(&self, config: &Config) -> Result<Vec<String>, Error> {
        let manager = load_manager(&self.file, self.policy, config)?;

        let prioritized = manager.prioritize()
            .map_err(|e| format_err!("Could not prioritize tasks. {}", e))?;

        if prioritized.is_empty() {
            return Ok(vec!["No tasks.".to_string()]);
        }

        Ok(format_rows(&prioritized))
    }
}
