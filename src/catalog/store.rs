use tracing::debug;

use crate::catalog::trie::ApproxTrie;
use crate::core::base::Base;
use crate::core::genome::Genome;
use crate::core::types::{FragmentMatch, Occurrence, SimilarityResult};
use crate::matching::engine::{MatchError, MatchingEngine};

/// Default seed length used when none is configured
pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 10;

/// Genome library indexed by fixed-length seeds
#[derive(Debug, Clone)]
pub struct FragmentIndex {
    /// Seed length; every trie key has exactly this many bases
    min_search_length: usize,

    /// Registered genomes, addressed by their index in this vec
    genomes: Vec<Genome>,

    /// Index: seed -> every (genome, position) it starts at
    trie: ApproxTrie<Occurrence>,
}

impl Default for FragmentIndex {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SEARCH_LENGTH)
    }
}

impl FragmentIndex {
    /// Create an empty index with the given seed length.
    ///
    /// # Panics
    ///
    /// Panics if `min_search_length` is zero.
    pub fn new(min_search_length: usize) -> Self {
        assert!(min_search_length > 0, "minimum search length must be positive");
        Self {
            min_search_length,
            genomes: Vec::new(),
            trie: ApproxTrie::new(),
        }
    }

    /// Build an index and register every genome in order
    pub fn with_genomes(
        min_search_length: usize,
        genomes: impl IntoIterator<Item = Genome>,
    ) -> Self {
        let mut index = Self::new(min_search_length);
        for genome in genomes {
            index.add_genome(genome);
        }
        index
    }

    pub fn min_search_length(&self) -> usize {
        self.min_search_length
    }

    /// Register a genome and seed every start position into the trie
    pub fn add_genome(&mut self, genome: Genome) {
        let genome_index = self.genomes.len();
        let k = self.min_search_length;

        let mut seeds = 0usize;
        for (position, seed) in genome.bases().windows(k).enumerate() {
            self.trie.insert(seed, Occurrence::new(genome_index, position));
            seeds += 1;
        }

        debug!(
            "Indexed genome '{}' ({} bases, {} seeds) as #{}",
            genome.name(),
            genome.length(),
            seeds,
            genome_index
        );

        self.genomes.push(genome);
    }

    pub fn genome(&self, index: usize) -> Option<&Genome> {
        self.genomes.get(index)
    }

    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// Remove every genome and seed, keeping the seed length
    pub fn clear(&mut self) {
        self.genomes.clear();
        self.trie.clear();
    }

    pub(crate) fn lookup_seed(&self, seed: &[Base], exact_only: bool) -> Vec<Occurrence> {
        self.trie.find(seed, exact_only)
    }

    /// Find where `fragment` occurs, see [`MatchingEngine::search`]
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or no seed matched.
    pub fn search(
        &self,
        fragment: &str,
        minimum_length: usize,
        exact_only: bool,
    ) -> Result<Vec<FragmentMatch>, MatchError> {
        MatchingEngine::new(self).search(fragment, minimum_length, exact_only)
    }

    /// Rank genomes sharing blocks with `query`, see [`MatchingEngine::find_related`]
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or no genome clears the threshold.
    pub fn find_related(
        &self,
        query: &Genome,
        block_length: usize,
        exact_only: bool,
        threshold_percent: f64,
    ) -> Result<Vec<SimilarityResult>, MatchError> {
        MatchingEngine::new(self).find_related(query, block_length, exact_only, threshold_percent)
    }
}
