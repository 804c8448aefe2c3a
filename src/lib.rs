//! # genome-matcher
//!
//! A library for finding DNA fragments and related genomes in an in-memory
//! sequence library.
//!
//! Genomes are indexed by every fixed-length substring ("seed") they contain.
//! The seed index is a prefix tree over the alphabet `A`, `C`, `G`, `T`, `N`
//! that answers both exact lookups and lookups tolerating one substituted
//! base (never the first one).
//!
//! ## Features
//!
//! - **Fragment search**: exact or single-mismatch occurrences of a fragment,
//!   extended base by base beyond the seed
//! - **Related genomes**: percentage of a query genome's blocks found in each
//!   library genome, ranked deterministically
//! - **FASTA loading**: plain or gzip/bgzip compressed libraries
//! - **Shared index**: concurrent queries with serialized insertion
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::{FragmentIndex, Genome};
//!
//! let mut index = FragmentIndex::new(3);
//! index.add_genome(Genome::from_text("first", "AAACGT").unwrap());
//! index.add_genome(Genome::from_text("second", "AAATGT").unwrap());
//!
//! // One substitution allowed: both genomes match all six bases
//! let hits = index.search("AAACGT", 4, false).unwrap();
//! for hit in &hits {
//!     println!("{} at {} ({} bases)", hit.genome_name, hit.position, hit.length);
//! }
//!
//! let query = Genome::from_text("query", "AAACGTAAATGT").unwrap();
//! let related = index.find_related(&query, 6, true, 50.0).unwrap();
//! assert_eq!(related.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Seed trie and genome index
//! - [`core`]: Bases, genomes and result types
//! - [`matching`]: Fragment search and similarity scoring
//! - [`parsing`]: FASTA loading
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::shared::SharedFragmentIndex;
pub use catalog::store::FragmentIndex;
pub use catalog::trie::ApproxTrie;
pub use core::base::Base;
pub use core::genome::Genome;
pub use core::types::*;
pub use matching::engine::{MatchError, MatchingConfig, MatchingEngine};
