//! Command-line interface for genome-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find where a DNA fragment occurs in a genome library
//! - **related**: Rank library genomes by how much of a query genome they share
//! - **library**: List the genomes in a library file
//!
//! ## Usage
//!
//! ```text
//! # Exact and near matches of a fragment, seeds of 12 bases
//! genome-matcher search library.fa ACGTTGCAACGTAGGT --min-search-length 12
//!
//! # Only exact matches, at least 14 bases long
//! genome-matcher search library.fa ACGTTGCAACGTAGGT --minimum-length 14 --exact-only
//!
//! # Genomes sharing at least 20% of 16-base blocks with each query record
//! genome-matcher related library.fa query.fa --block-length 16 --threshold 20
//!
//! # JSON output for scripting
//! genome-matcher related library.fa query.fa --format json
//! ```

use std::io::{self, BufReader};
use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::catalog::store::FragmentIndex;
use crate::core::genome::Genome;
use crate::parsing::fasta::{is_fasta_file, load_genomes, load_genomes_from_reader};

pub mod library;
pub mod related;
pub mod search;

#[derive(Parser)]
#[command(name = "genome-matcher")]
#[command(version)]
#[command(about = "Find DNA fragments and related genomes in a sequence library")]
#[command(
    long_about = "genome-matcher indexes a FASTA library of genomes by fixed-length seeds.\n\nIt answers two kinds of queries:\n- Where does a fragment occur, exactly or with one substituted base?\n- Which genomes share most of their blocks with a query genome?"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every occurrence of a DNA fragment
    Search(search::SearchArgs),

    /// Find library genomes related to query genomes
    Related(related::RelatedArgs),

    /// List the genomes in a library
    Library(library::LibraryArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a FASTA file, or FASTA text on stdin when `path` is `-`
pub(crate) fn read_genomes(path: &Path) -> anyhow::Result<Vec<Genome>> {
    if path.to_string_lossy() == "-" {
        return Ok(load_genomes_from_reader(BufReader::new(io::stdin().lock()))?);
    }
    if !is_fasta_file(path) {
        warn!(
            "{} does not have a FASTA extension; reading it as FASTA anyway",
            path.display()
        );
    }
    Ok(load_genomes(path)?)
}

/// Load a library and index it with seeds of `min_search_length` bases
pub(crate) fn build_index(path: &Path, min_search_length: u32) -> anyhow::Result<FragmentIndex> {
    let genomes = read_genomes(path)?;
    let index = FragmentIndex::with_genomes(min_search_length as usize, genomes);
    debug!(
        "Indexed {} genomes with {}-base seeds",
        index.len(),
        index.min_search_length()
    );
    Ok(index)
}
