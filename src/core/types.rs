use serde::{Deserialize, Serialize};

/// Where a seed was found: genome id within the index and start position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Occurrence {
    pub genome_index: usize,
    pub position: usize,
}

impl Occurrence {
    pub fn new(genome_index: usize, position: usize) -> Self {
        Self {
            genome_index,
            position,
        }
    }
}

/// One fragment search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentMatch {
    /// Name of the genome containing the match
    pub genome_name: String,

    /// Zero-based start of the match in the genome
    pub position: usize,

    /// Number of fragment bases matched from the start
    pub length: usize,
}

/// How much of a query genome is shared with an indexed genome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub genome_name: String,

    /// Share of query blocks matched, as a percentage
    pub percent_match: f64,
}

/// How block hits are tallied when scoring related genomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCounting {
    /// Every matching position counts, so a block can count several times
    /// for one genome and percentages can exceed 100
    #[default]
    PerMatch,
    /// A block counts at most once per genome
    PerBlock,
}
