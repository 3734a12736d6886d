// StudyPalz - Application Entry Point
//
// Parses CLI arguments, loads configuration, initializes structured logging
// and dispatches to the command handler.

use clap::Parser;

use studypalz::cli::{execute, Cli};
use studypalz::config::Config;
use studypalz::logging::init_tracing;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = execute(cli, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
