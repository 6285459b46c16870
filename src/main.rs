use task_prioritizer::{commands, config::Config};

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(std::io::stderr)
        .init();

    let args = commands::TKPArgs::get_args();

    let config = match Config::new_in(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    match args.cmd.dispatch(&config) {
        Ok(output) => {
            for line in output {
                println!("{}", line);
            }
        },
        Err(e) => {
            eprintln!("Error completing action: {}", e);
            std::process::exit(1);
        }
    }
}
