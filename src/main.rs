use anyhow::Context;
use clap::Parser;
use fi::app::{handle_fatal_error, init_logging, FiConfig};
use fi::cli::{execute_command, read_document, render, Cli};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli) {
        handle_fatal_error(e, verbose);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("Failed to determine working directory")?;
    let config = FiConfig::load(cli.config.as_deref(), &working_dir)?
        .with_verbose(cli.verbose)
        .with_pretty(cli.pretty);

    init_logging(&config);

    let document = read_document(cli.input.as_deref())?;
    let result = execute_command(&cli.command, &document)?;
    debug!(output_type = result.type_name(), "command finished");

    println!("{}", render(&result, config.output.pretty)?);
    Ok(())
}
