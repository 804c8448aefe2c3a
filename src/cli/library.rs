use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_genomes, OutputFormat};
use crate::core::genome::Genome;

#[derive(Args)]
pub struct LibraryArgs {
    /// Genome library (FASTA, optionally gzipped). Use '-' for stdin
    #[arg(required = true)]
    pub library: PathBuf,
}

/// Execute library subcommand
///
/// # Errors
///
/// Returns an error if the library cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LibraryArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let genomes = read_genomes(&args.library)?;

    match format {
        OutputFormat::Text => print_text(&genomes),
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = genomes
                .iter()
                .map(|g| serde_json::json!({ "name": g.name(), "length": g.length() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tlength");
            for g in &genomes {
                println!("{}\t{}", g.name(), g.length());
            }
        }
    }

    Ok(())
}

fn print_text(genomes: &[Genome]) {
    let total: usize = genomes.iter().map(Genome::length).sum();
    println!("{} genomes, {} bases", genomes.len(), total);
    println!("{}", "-".repeat(60));
    for g in genomes {
        println!("{:<48} {:>11}", g.name(), g.length());
    }
}
