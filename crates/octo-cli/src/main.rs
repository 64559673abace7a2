//! octo CLI - search GitHub issues from the terminal.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod services;

use commands::{Cli, Commands, SearchTarget};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    output::set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Search {
            target: SearchTarget::Issues(args),
        } => commands::search::run_issues(&cli.global, &args),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Install the tracing subscriber. Logs go to stderr so stdout stays
/// machine-readable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
