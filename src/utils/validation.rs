//! Centralized validation and helper functions.

/// Maximum number of genomes loaded from a single file (memory protection)
pub const MAX_GENOMES: usize = 100_000;

/// Check if adding another genome would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new genome.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_genome_limit(genomes.len()).is_some() {
///     return Err(...);
/// }
/// genomes.push(new_genome); // Safe to add
/// ```
#[must_use]
pub fn check_genome_limit(count: usize) -> Option<String> {
    if count >= MAX_GENOMES {
        Some(format!(
            "Too many genomes: adding another would exceed maximum of {MAX_GENOMES}"
        ))
    } else {
        None
    }
}

/// Whether `percent` is a usable similarity threshold (0-100 inclusive, not NaN)
///
/// ```
/// use genome_matcher::utils::validation::is_valid_threshold;
///
/// assert!(is_valid_threshold(100.0));
/// assert!(!is_valid_threshold(f64::NAN));
/// ```
#[must_use]
pub fn is_valid_threshold(percent: f64) -> bool {
    (0.0..=100.0).contains(&percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_genome_limit() {
        assert!(check_genome_limit(0).is_none());
        assert!(check_genome_limit(MAX_GENOMES - 1).is_none());
        assert!(check_genome_limit(MAX_GENOMES).is_some());
    }

    #[test]
    fn test_is_valid_threshold() {
        assert!(is_valid_threshold(0.0));
        assert!(is_valid_threshold(100.0));
        assert!(is_valid_threshold(37.5));
        assert!(!is_valid_threshold(-0.1));
        assert!(!is_valid_threshold(100.01));
        assert!(!is_valid_threshold(f64::NAN));
    }
}
