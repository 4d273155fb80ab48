pub mod cli;
pub mod commands;

use clap::Parser;
use cli::Snipgen;
use commands::handle_command;
use snipgen_core::Config;
use std::process;

/// Run the snipgen CLI application
pub fn run_main() {
    let args = Snipgen::parse();
    init_logging(args.verbose);

    let config = Config::from_env();
    log::debug!("Using config dir {}", config.config_dir.display());

    if let Err(e) = handle_command(args.commands, &config, args.lossy) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}
