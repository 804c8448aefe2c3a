use clap::Parser;
use genome_matcher::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("genome_matcher=debug,info")
    } else {
        EnvFilter::new("genome_matcher=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Related(args) => {
            cli::related::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Library(args) => {
            cli::library::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
