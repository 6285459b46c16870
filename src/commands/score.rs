use std::path::PathBuf;

use failure::Error;
use structopt::StructOpt;

use crate::config::Config;

use super::{display_name, format_score, load_manager, Subcommand};

#[derive(StructOpt, Debug)]
pub struct Score {
    #[structopt(parse(from_os_str))]
    /// The task list file
    pub file: PathBuf,
}

impl Subcommand for Score {
    fn run(&self, config: &Config) -> Result<Vec<String>, Error> {
        let manager = load_manager(&self.file, None, config)?;

        let scores = manager.score_all()
            .map_err(|e| format_err!("Could not score tasks. {}", e))?;

        if scores.is_empty() {
            return Ok(vec!["No tasks.".to_string()]);
        }

        let mut output = vec!["Task\tScore".to_string()];
        for (task, score) in manager.tasks().iter().zip(scores) {
            output.push(format!("{}\t{}", display_name(&task.borrow()), format_score(score)));
        }

        Ok(output)
    }
}
