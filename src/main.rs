mod analyzer;
mod app;
mod caption;
mod cli;
mod config;
mod dataset;
mod domain;
mod error;
mod fs;
mod recorder;
mod report;
mod runlog;
mod strategy;
mod wiring;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::error::Error;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("postpilot: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let cli_config = cli::parse_args()?;
    if cli_config.help {
        print_help();
        return Ok(0);
    }
    let config = AppConfig::from_env(&cli_config)?;
    let app = wiring::wire_app(config);
    app.run()
}

fn print_usage() {
    eprintln!("Usage: postpilot [options]");
}

fn print_help() {
    println!("Usage: postpilot [options]");
    println!();
    println!("Analyze historical post metrics, pick the best content type and posting");
    println!("hour, generate a caption via the ScaleDown API, and append the decision");
    println!("to the log.");
    println!();
    println!("Options:");
    println!("  -h, --help            Show this help message");
    println!("  -d, --data <PATH>     Path to the posts dataset (default: data/posts.csv)");
    println!("  --log-dir <DIR>       Directory for the decision log and run log (default: logs)");
    println!();
    println!("Environment:");
    println!("  SCALEDOWN_API_KEY     Required. Credential for the caption endpoint.");
    println!("                        A .env file in the working directory is loaded if present.");
    println!("  POSTPILOT_ENDPOINT    Optional. Override the caption endpoint URL.");
    println!();
    println!("Dataset format (comma separated, header required):");
    println!("  content_type,posted_time,likes,comments,shares");
}
