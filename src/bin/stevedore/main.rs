//! Stevedore CLI - dependency closure inspection for package archives

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use stevedore::util::shell::ColorChoice;
use stevedore::util::Shell;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("stevedore=debug")
    } else {
        EnvFilter::new("stevedore=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // The shell is passed explicitly to every command; nothing else writes
    // user-facing output.
    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let shell = Shell::from_flags(cli.quiet, cli.verbose, color);

    // Execute command
    match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args, &shell),
        Commands::Scan(args) => commands::scan::execute(args, &shell),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
