use thiserror::Error;
use tracing::{debug, trace};

use crate::catalog::store::FragmentIndex;
use crate::core::base::{parse_bases, Base};
use crate::core::genome::Genome;
use crate::core::types::{BlockCounting, FragmentMatch, Occurrence, SimilarityResult};
use crate::matching::scoring::{rank_results, BlockTally};
use crate::utils::validation::is_valid_threshold;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Invalid fragment: {0}")]
    InvalidFragment(String),

    #[error("Minimum length {minimum_length} is below the index seed length {min_search_length}")]
    MinimumLengthTooShort {
        minimum_length: usize,
        min_search_length: usize,
    },

    #[error("Fragment length {fragment_length} is below the minimum length {minimum_length}")]
    FragmentShorterThanMinimum {
        fragment_length: usize,
        minimum_length: usize,
    },

    #[error("Block length {block_length} is below the index seed length {min_search_length}")]
    BlockLengthTooShort {
        block_length: usize,
        min_search_length: usize,
    },

    #[error("Threshold {0} is outside 0-100 percent")]
    InvalidThreshold(f64),

    #[error("No matches found")]
    NoMatches,

    #[error("Index invariant violated: {0}")]
    Internal(String),
}

impl MatchError {
    /// True for the expected "nothing found" outcome, false for argument or internal errors
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoMatches)
    }
}

/// Configuration for the matching engine
#[derive(Debug, Clone, Default)]
pub struct MatchingConfig {
    /// How block hits are tallied when scoring related genomes
    pub block_counting: BlockCounting,
}

/// Fragment search and genome similarity over a [`FragmentIndex`]
pub struct MatchingEngine<'a> {
    index: &'a FragmentIndex,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(index: &'a FragmentIndex) -> Self {
        Self {
            index,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(index: &'a FragmentIndex, config: MatchingConfig) -> Self {
        Self { index, config }
    }

    /// Find every place `fragment` occurs with at least `minimum_length` matching bases.
    ///
    /// A fragment exactly one seed long reports at most one hit per genome, at
    /// its lowest position. Longer fragments are anchored on their first seed
    /// and extended base by base; each distinct anchor position is reported
    /// if the extension reaches `minimum_length`. With `exact_only` false the
    /// extension tolerates a single substitution.
    ///
    /// # Errors
    ///
    /// Returns an argument error for an empty or non-`ACGTN` fragment, a
    /// `minimum_length` below the seed length, or a fragment shorter than
    /// `minimum_length`. Returns `MatchError::NoMatches` when the anchoring
    /// seed is not found at all; a seed hit whose extensions all fall short
    /// yields `Ok` with an empty list.
    pub fn search(
        &self,
        fragment: &str,
        minimum_length: usize,
        exact_only: bool,
    ) -> Result<Vec<FragmentMatch>, MatchError> {
        if fragment.is_empty() {
            return Err(MatchError::InvalidFragment("fragment is empty".to_string()));
        }
        let bases = parse_bases(fragment).map_err(|(offset, c)| {
            MatchError::InvalidFragment(format!(
                "'{c}' at offset {offset} is not an upper-case A, C, G, T or N"
            ))
        })?;
        self.search_bases(&bases, minimum_length, exact_only)
    }

    /// [`search`](Self::search) on an already validated base slice
    ///
    /// # Errors
    ///
    /// See [`search`](Self::search).
    pub fn search_bases(
        &self,
        fragment: &[Base],
        minimum_length: usize,
        exact_only: bool,
    ) -> Result<Vec<FragmentMatch>, MatchError> {
        let k = self.index.min_search_length();

        if fragment.is_empty() {
            return Err(MatchError::InvalidFragment("fragment is empty".to_string()));
        }
        if minimum_length < k {
            return Err(MatchError::MinimumLengthTooShort {
                minimum_length,
                min_search_length: k,
            });
        }
        if fragment.len() < minimum_length {
            return Err(MatchError::FragmentShorterThanMinimum {
                fragment_length: fragment.len(),
                minimum_length,
            });
        }

        let mut candidates = self.index.lookup_seed(&fragment[..k], exact_only);
        if candidates.is_empty() {
            return Err(MatchError::NoMatches);
        }
        candidates.sort_unstable();

        if fragment.len() == k {
            // One hit per genome, at its lowest position
            candidates.dedup_by_key(|occ| occ.genome_index);
            return candidates
                .into_iter()
                .map(|occ| self.to_match(occ, k))
                .collect();
        }

        candidates.dedup();
        trace!(
            "Extending {} seed candidates for a {}-base fragment",
            candidates.len(),
            fragment.len()
        );

        let mut matches = Vec::new();
        for occ in candidates {
            let genome = self.genome(occ)?;
            let Ok(target) = genome.extract(occ.position, fragment.len()) else {
                trace!(
                    "Skipping candidate at {}:{} that would read past the end",
                    genome.name(),
                    occ.position
                );
                continue;
            };

            let length = extend_match(fragment, target, exact_only);
            if length >= minimum_length {
                matches.push(FragmentMatch {
                    genome_name: genome.name().to_string(),
                    position: occ.position,
                    length,
                });
            }
        }

        Ok(matches)
    }

    /// Rank indexed genomes by the share of `query` blocks they contain.
    ///
    /// `query` is cut into `query.length() / block_length` consecutive
    /// blocks (a trailing partial block is ignored) and each block is
    /// searched with `minimum_length = block_length`. Genomes whose
    /// percentage reaches `threshold_percent` are returned, highest first,
    /// ties by ascending name.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `block_length` is below the seed length
    /// or `threshold_percent` is outside 0-100, and `MatchError::NoMatches`
    /// when no genome reaches the threshold.
    pub fn find_related(
        &self,
        query: &Genome,
        block_length: usize,
        exact_only: bool,
        threshold_percent: f64,
    ) -> Result<Vec<SimilarityResult>, MatchError> {
        let k = self.index.min_search_length();
        if block_length < k {
            return Err(MatchError::BlockLengthTooShort {
                block_length,
                min_search_length: k,
            });
        }
        if !is_valid_threshold(threshold_percent) {
            return Err(MatchError::InvalidThreshold(threshold_percent));
        }

        let block_count = query.length() / block_length;
        let mut tally = BlockTally::new(self.config.block_counting);

        for block in query.bases().chunks_exact(block_length) {
            match self.search_bases(block, block_length, exact_only) {
                Ok(matches) => tally.record_block(&matches),
                Err(MatchError::NoMatches) => {}
                Err(e) => return Err(e),
            }
        }

        let results = tally.into_results(block_count, threshold_percent);
        debug!(
            "Query '{}': {} blocks of {}, {} genomes at or above {}%",
            query.name(),
            block_count,
            block_length,
            results.len(),
            threshold_percent
        );

        if results.is_empty() {
            return Err(MatchError::NoMatches);
        }
        Ok(rank_results(results))
    }

    fn genome(&self, occ: Occurrence) -> Result<&'a Genome, MatchError> {
        self.index.genome(occ.genome_index).ok_or_else(|| {
            MatchError::Internal(format!(
                "seed refers to unknown genome #{}",
                occ.genome_index
            ))
        })
    }

    fn to_match(&self, occ: Occurrence, length: usize) -> Result<FragmentMatch, MatchError> {
        let genome = self.genome(occ)?;
        if genome.extract(occ.position, length).is_err() {
            return Err(MatchError::Internal(format!(
                "seed at {}:{} runs past the end of the genome",
                genome.name(),
                occ.position
            )));
        }
        Ok(FragmentMatch {
            genome_name: genome.name().to_string(),
            position: occ.position,
            length,
        })
    }
}

/// Number of leading bases of `fragment` matched by `target`.
///
/// Scanning stops at the first difference when `exact_only`, otherwise at
/// the second one.
fn extend_match(fragment: &[Base], target: &[Base], exact_only: bool) -> usize {
    let mut mismatch_used = exact_only;
    for (i, (a, b)) in fragment.iter().zip(target).enumerate() {
        if a != b {
            if mismatch_used {
                return i;
            }
            mismatch_used = true;
        }
    }
    fragment.len().min(target.len())
}
