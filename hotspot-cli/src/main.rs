use std::process::ExitCode;

use clap::Parser;
use hotspot_cli::{format_summary, run, Args};

fn main() -> ExitCode {
    env_logger::init();

    let result = Args::parse().into_run_config().and_then(|config| run(&config));
    match result {
        Ok(summary) => {
            println!("{}", format_summary(&summary));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Run failed: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
