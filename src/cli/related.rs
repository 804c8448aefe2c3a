use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::catalog::store::DEFAULT_MIN_SEARCH_LENGTH;
use crate::cli::{build_index, read_genomes, OutputFormat};
use crate::core::types::{BlockCounting, SimilarityResult};
use crate::matching::engine::{MatchError, MatchingConfig, MatchingEngine};

/// Default block size for related-genome scoring
pub const DEFAULT_BLOCK_LENGTH: usize = 16;

/// Default minimum percentage for reporting a related genome
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 10.0;

#[derive(Args)]
pub struct RelatedArgs {
    /// Genome library (FASTA, optionally gzipped)
    #[arg(required = true)]
    pub library: PathBuf,

    /// Query genomes (FASTA, optionally gzipped). Use '-' for stdin
    #[arg(required = true)]
    pub query: PathBuf,

    /// Seed length used to index the library
    #[arg(short = 'k', long, default_value_t = DEFAULT_MIN_SEARCH_LENGTH as u32,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub min_search_length: u32,

    /// Length of the query blocks that are searched
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_LENGTH)]
    pub block_length: usize,

    /// Minimum percentage of matched blocks to report a genome (0-100)
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD_PERCENT)]
    pub threshold: f64,

    /// Count only exact block matches (no substituted base)
    #[arg(long)]
    pub exact_only: bool,

    /// Count a block at most once per genome, even if it matches several positions
    #[arg(long)]
    pub count_once_per_block: bool,
}

/// Execute related subcommand
///
/// # Errors
///
/// Returns an error if either file cannot be loaded or the scoring arguments are invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RelatedArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let index = build_index(&args.library, args.min_search_length)?;
    let queries = read_genomes(&args.query)?;

    if verbose {
        eprintln!(
            "Loaded {} library genomes and {} queries",
            index.len(),
            queries.len()
        );
    }

    let config = MatchingConfig {
        block_counting: if args.count_once_per_block {
            BlockCounting::PerBlock
        } else {
            BlockCounting::PerMatch
        },
    };
    let engine = MatchingEngine::with_config(&index, config);

    let mut reports: Vec<(String, Vec<SimilarityResult>)> = Vec::with_capacity(queries.len());
    for query in &queries {
        if query.length() < args.block_length {
            warn!(
                "Query '{}' ({} bases) is shorter than one block of {}",
                query.name(),
                query.length(),
                args.block_length
            );
        }
        let results = match engine.find_related(
            query,
            args.block_length,
            args.exact_only,
            args.threshold,
        ) {
            Ok(results) => results,
            Err(MatchError::NoMatches) => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        reports.push((query.name().to_string(), results));
    }

    match format {
        OutputFormat::Text => print_text_results(&reports, args.threshold),
        OutputFormat::Json => print_json_results(&reports)?,
        OutputFormat::Tsv => print_tsv_results(&reports),
    }

    Ok(())
}

fn print_text_results(reports: &[(String, Vec<SimilarityResult>)], threshold: f64) {
    for (query, results) in reports {
        println!("Query: {query}");
        if results.is_empty() {
            println!("  No related genomes at or above {threshold}%");
            continue;
        }
        for (i, r) in results.iter().enumerate() {
            println!("  {}. {} ({:.2}%)", i + 1, r.genome_name, r.percent_match);
        }
    }
}

fn print_json_results(reports: &[(String, Vec<SimilarityResult>)]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = reports
        .iter()
        .map(|(query, results)| {
            serde_json::json!({
                "query": query,
                "related": results,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(reports: &[(String, Vec<SimilarityResult>)]) {
    println!("query\trank\tgenome\tpercent_match");
    for (query, results) in reports {
        for (i, r) in results.iter().enumerate() {
            println!("{}\t{}\t{}\t{:.4}", query, i + 1, r.genome_name, r.percent_match);
        }
    }
}
