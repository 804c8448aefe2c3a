use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::DEFAULT_MIN_SEARCH_LENGTH;
use crate::cli::{build_index, OutputFormat};
use crate::core::types::FragmentMatch;
use crate::matching::engine::{MatchError, MatchingEngine};

#[derive(Args)]
pub struct SearchArgs {
    /// Genome library (FASTA, optionally gzipped). Use '-' for stdin
    #[arg(required = true)]
    pub library: PathBuf,

    /// Fragment to search for (upper-case A, C, G, T, N)
    #[arg(required = true)]
    pub fragment: String,

    /// Seed length used to index the library
    #[arg(short = 'k', long, default_value_t = DEFAULT_MIN_SEARCH_LENGTH as u32,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub min_search_length: u32,

    /// Shortest match to report (defaults to the fragment length)
    #[arg(short = 'm', long)]
    pub minimum_length: Option<usize>,

    /// Report only exact matches (no substituted base)
    #[arg(long)]
    pub exact_only: bool,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the library cannot be loaded or the search arguments are invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let index = build_index(&args.library, args.min_search_length)?;

    if verbose {
        eprintln!(
            "Loaded {} genomes, indexed with {}-base seeds",
            index.len(),
            index.min_search_length()
        );
    }

    let minimum_length = args.minimum_length.unwrap_or(args.fragment.len());
    let engine = MatchingEngine::new(&index);
    let matches = match engine.search(&args.fragment, minimum_length, args.exact_only) {
        Ok(matches) => matches,
        Err(MatchError::NoMatches) => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    if matches.is_empty() {
        eprintln!("No matches found.");
    }

    match format {
        OutputFormat::Text if matches.is_empty() => {}
        OutputFormat::Text => print_text_results(&args.fragment, &matches),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matches)?),
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn print_text_results(fragment: &str, matches: &[FragmentMatch]) {
    println!(
        "{} match(es) for {} ({} bases)",
        matches.len(),
        fragment,
        fragment.len()
    );
    for m in matches {
        println!(
            "  {}: length {} at position {}",
            m.genome_name, m.length, m.position
        );
    }
}

fn print_tsv_results(matches: &[FragmentMatch]) {
    println!("genome\tposition\tlength");
    for m in matches {
        println!("{}\t{}\t{}", m.genome_name, m.position, m.length);
    }
}
