use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::store::FragmentIndex;
use crate::core::genome::Genome;
use crate::core::types::{FragmentMatch, SimilarityResult};
use crate::matching::engine::{MatchError, MatchingConfig, MatchingEngine};

/// A [`FragmentIndex`] shared between threads.
///
/// Queries take a read lock and run concurrently; `add_genome` takes the
/// write lock, so an insertion never overlaps a trie traversal.
#[derive(Debug, Clone)]
pub struct SharedFragmentIndex {
    inner: Arc<RwLock<FragmentIndex>>,
    config: MatchingConfig,
}

impl SharedFragmentIndex {
    pub fn new(index: FragmentIndex) -> Self {
        Self::with_config(index, MatchingConfig::default())
    }

    pub fn with_config(index: FragmentIndex, config: MatchingConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
            config,
        }
    }

    pub fn add_genome(&self, genome: Genome) {
        self.inner.write().add_genome(genome);
    }

    pub fn min_search_length(&self) -> usize {
        self.inner.read().min_search_length()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// # Errors
    ///
    /// See [`MatchingEngine::search`].
    pub fn search(
        &self,
        fragment: &str,
        minimum_length: usize,
        exact_only: bool,
    ) -> Result<Vec<FragmentMatch>, MatchError> {
        let index = self.inner.read();
        MatchingEngine::with_config(&index, self.config.clone()).search(
            fragment,
            minimum_length,
            exact_only,
        )
    }

    /// # Errors
    ///
    /// See [`MatchingEngine::find_related`].
    pub fn find_related(
        &self,
        query: &Genome,
        block_length: usize,
        exact_only: bool,
        threshold_percent: f64,
    ) -> Result<Vec<SimilarityResult>, MatchError> {
        let index = self.inner.read();
        MatchingEngine::with_config(&index, self.config.clone()).find_related(
            query,
            block_length,
            exact_only,
            threshold_percent,
        )
    }
}
