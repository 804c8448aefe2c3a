//! Genome library storage and seed indexing.
//!
//! A [`FragmentIndex`] owns every registered genome and a prefix tree keyed
//! by fixed-length seeds. Each seed maps to the `(genome, position)` pairs
//! where it starts. The seed length (`min_search_length`) is chosen when the
//! index is created and bounds the shortest fragment that can be searched.
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::{FragmentIndex, Genome};
//!
//! let mut index = FragmentIndex::new(4);
//! index.add_genome(Genome::from_text("chrA", "ACGTACGTTT").unwrap());
//!
//! let hits = index.search("ACGTT", 5, true).unwrap();
//! assert_eq!(hits[0].position, 4);
//! ```
//!
//! For use across threads, wrap the index in a [`SharedFragmentIndex`].
//!
//! [`FragmentIndex`]: store::FragmentIndex
//! [`SharedFragmentIndex`]: shared::SharedFragmentIndex

pub mod shared;
pub mod store;
pub mod trie;
