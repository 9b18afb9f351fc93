use clap::Parser;
use tracing_subscriber::EnvFilter;

use runmatch::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("runmatch=debug,info")
    } else {
        EnvFilter::new("runmatch=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Align(args) => {
            cli::align::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Strip(args) => {
            cli::strip::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
