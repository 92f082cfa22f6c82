//! z3pack CLI - build and package the Z3 theorem prover

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use z3pack::util::shell::Shell;

mod cli;
mod commands;

use cli::{Cli, Commands};

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
        EnvFilter::new("z3pack=debug")
    } else {
        EnvFilter::new("z3pack=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let shell = Shell::from_flags(cli.quiet, cli.verbose, cli.color);

    // Execute command
    match cli.command {
        Commands::Build(args) => commands::build::execute(args, &shell),
        Commands::Develop(args) => commands::develop::execute(args, &shell),
        Commands::Bdist(args) => commands::bdist::execute(args, &shell),
        Commands::Sdist(args) => commands::sdist::execute(args, &shell),
        Commands::Clean(args) => commands::clean::execute(args, &shell),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
