mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Push {
            overrides,
            dry_run,
            json,
        } => commands::push::run(cli.root, overrides.into(), dry_run, json),
        Commands::Which {
            uploader_path,
            json,
        } => commands::which::run(cli.root, uploader_path, json),
        Commands::Doctor { json } => commands::doctor::run(cli.root, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
