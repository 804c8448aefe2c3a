use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use crate::core::types::{BlockCounting, FragmentMatch, SimilarityResult};

/// Safely convert usize to f64 for percentage calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Percentage of `block_count` blocks represented by `count` hits
#[must_use]
pub fn percent_match(count: usize, block_count: usize) -> f64 {
    if block_count == 0 {
        0.0
    } else {
        100.0 * count_to_f64(count) / count_to_f64(block_count)
    }
}

/// Per-genome hit counter across the blocks of one query
#[derive(Debug, Clone)]
pub struct BlockTally {
    counting: BlockCounting,
    counts: BTreeMap<String, usize>,
}

impl BlockTally {
    pub fn new(counting: BlockCounting) -> Self {
        Self {
            counting,
            counts: BTreeMap::new(),
        }
    }

    /// Count the matches found for one block
    pub fn record_block(&mut self, matches: &[FragmentMatch]) {
        match self.counting {
            BlockCounting::PerMatch => {
                for m in matches {
                    *self.counts.entry(m.genome_name.clone()).or_default() += 1;
                }
            }
            BlockCounting::PerBlock => {
                let genomes: HashSet<&str> =
                    matches.iter().map(|m| m.genome_name.as_str()).collect();
                for name in genomes {
                    *self.counts.entry(name.to_string()).or_default() += 1;
                }
            }
        }
    }

    #[cfg(test)]
    fn count(&self, genome_name: &str) -> usize {
        self.counts.get(genome_name).copied().unwrap_or(0)
    }

    /// Genomes whose percentage reaches `threshold_percent`, unsorted
    pub fn into_results(
        self,
        block_count: usize,
        threshold_percent: f64,
    ) -> Vec<SimilarityResult> {
        self.counts
            .into_iter()
            .map(|(genome_name, count)| SimilarityResult {
                genome_name,
                percent_match: percent_match(count, block_count),
            })
            .filter(|r| r.percent_match >= threshold_percent)
            .collect()
    }
}

/// Descending by percentage, ties by ascending genome name
fn compare_results(a: &SimilarityResult, b: &SimilarityResult) -> Ordering {
    b.percent_match
        .total_cmp(&a.percent_match)
        .then_with(|| a.genome_name.cmp(&b.genome_name))
}

/// Sort results into their reporting order
#[must_use]
pub fn rank_results(mut results: Vec<SimilarityResult>) -> Vec<SimilarityResult> {
    results.sort_by(compare_results);
    results
}
