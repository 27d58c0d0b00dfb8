//! `escapes` - print ANSI/VT100 escape sequences from the command line.

use anyhow::Result;
use clap::Parser;

use escapes::cli::{Cli, Commands};
use escapes::config::OutputConfig;
use escapes::{logging, Config};

mod commands;

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let output = OutputConfig {
        escaped: cli.escaped || config.output.escaped,
        newline: cli.newline || config.output.newline,
    };
    tracing::debug!(command = ?cli.command, ?output, "dispatching");

    match cli.command {
        Commands::List { category, json } => commands::list::handle(category, json),
        Commands::Completions { shell } => commands::completions::handle(shell),
        command => {
            let seq = commands::sequence::render(command)?;
            commands::sequence::emit(&seq, &output)
        }
    }
}
