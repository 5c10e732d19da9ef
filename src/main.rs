//! CLI entry point for the Mondrian painter

use clap::Parser;
use mondrian::io::cli::Cli;
use mondrian::io::logging::init_logging;

// Allow print for the summary report
#[allow(clippy::print_stdout)]
fn main() -> mondrian::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.logging_config());

    let summary = cli.run()?;
    if !cli.quiet {
        print!("{summary}");
    }
    Ok(())
}
