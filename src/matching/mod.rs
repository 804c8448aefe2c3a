//! Fragment search and genome similarity scoring.
//!
//! - [`MatchingEngine`]: entry point for both query kinds over a [`FragmentIndex`]
//! - [`scoring`]: block tallies, percentages and result ordering
//!
//! ## Fragment search
//!
//! 1. **Seed lookup**: the first `min_search_length` bases of the fragment are
//!    looked up in the trie, exactly or with one substitution
//! 2. **Extension**: longer fragments are compared base by base against each
//!    candidate position, stopping at the first mismatch (exact) or the second
//! 3. **Filtering**: hits shorter than the requested minimum length are dropped
//!
//! ## Related genomes
//!
//! The query is cut into fixed-size blocks, each block is searched, and each
//! genome's hit count is reported as a percentage of the block count.
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::{FragmentIndex, Genome, MatchingEngine};
//!
//! let mut index = FragmentIndex::new(3);
//! index.add_genome(Genome::from_text("first", "AAACGT").unwrap());
//! index.add_genome(Genome::from_text("second", "AAATGT").unwrap());
//!
//! let engine = MatchingEngine::new(&index);
//! let hits = engine.search("AAACGT", 4, false).unwrap();
//! assert_eq!(hits.len(), 2);
//! ```
//!
//! [`FragmentIndex`]: crate::catalog::store::FragmentIndex

pub mod engine;
pub mod scoring;

pub use engine::{MatchError, MatchingConfig, MatchingEngine};
