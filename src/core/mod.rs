//! Core data types for DNA fragment and genome matching.
//!
//! - [`Base`]: one nucleotide of the fixed alphabet `A`, `C`, `G`, `T`, `N`
//! - [`Genome`]: a named, immutable base sequence with bounded extraction
//! - [`FragmentMatch`], [`SimilarityResult`]: query results
//!
//! [`Base`]: base::Base
//! [`Genome`]: genome::Genome
//! [`FragmentMatch`]: types::FragmentMatch
//! [`SimilarityResult`]: types::SimilarityResult

pub mod base;
pub mod genome;
pub mod types;
