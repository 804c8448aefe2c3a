//! Loaders that turn sequence files into [`Genome`] values.
//!
//! Only FASTA is supported, plain or gzip/bgzip compressed:
//!
//! ```rust,no_run
//! use genome_matcher::parsing::fasta::load_genomes;
//! use std::path::Path;
//!
//! let genomes = load_genomes(Path::new("library.fa.gz")).unwrap();
//! for genome in &genomes {
//!     println!("{}\t{}", genome.name(), genome.length());
//! }
//! ```
//!
//! [`Genome`]: crate::core::genome::Genome

pub mod fasta;
