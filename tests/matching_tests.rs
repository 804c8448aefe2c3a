//! Behavioural tests for seed lookup, fragment search and related-genome scoring.

use genome_matcher::{
    ApproxTrie, Base, BlockCounting, FragmentIndex, FragmentMatch, Genome, MatchError,
    MatchingConfig, MatchingEngine,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn genome(name: &str, seq: &str) -> Genome {
    Genome::from_text(name, seq).unwrap()
}

fn bases(s: &str) -> Vec<Base> {
    genome("key", s).bases().to_vec()
}

/// Seeded random ACGT sequence
fn random_sequence(seed: u64, length: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length)
        .map(|_| *['A', 'C', 'G', 'T'].choose(&mut rng).unwrap())
        .collect()
}

/// Every 4-base key over ACGT
fn all_keys() -> Vec<String> {
    let alphabet = ['A', 'C', 'G', 'T'];
    let mut keys = Vec::new();
    for a in alphabet {
        for b in alphabet {
            for c in alphabet {
                for d in alphabet {
                    keys.push([a, b, c, d].iter().collect());
                }
            }
        }
    }
    keys
}

fn mismatches(a: &str, b: &str) -> (usize, bool) {
    let count = a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count();
    let first_differs = a.as_bytes()[0] != b.as_bytes()[0];
    (count, first_differs)
}

#[test]
fn test_trie_lookup_contract_over_all_keys() {
    let stored = ["ACGT", "ACGA", "TTTT", "GACA", "CCGT", "AAAA", "ACGT"];
    let mut trie = ApproxTrie::new();
    for (value, key) in stored.iter().enumerate() {
        trie.insert(&bases(key), value);
    }

    for probe in all_keys() {
        let exact = trie.find(&bases(&probe), true);
        let near = trie.find(&bases(&probe), false);

        for (value, key) in stored.iter().enumerate() {
            let (diff, first_differs) = mismatches(&probe, key);

            // exact lookup returns exactly the equal keys
            assert_eq!(exact.contains(&value), diff == 0, "exact {probe} vs {key}");

            // near lookup: equal, or one substitution after the first base
            let expected = diff == 0 || (diff == 1 && !first_differs);
            assert_eq!(near.contains(&value), expected, "near {probe} vs {key}");
        }

        // near is a superset of exact
        for value in &exact {
            assert!(near.contains(value));
        }
    }
}

#[test]
fn test_trie_duplicates_are_kept() {
    let mut trie = ApproxTrie::new();
    trie.insert(&bases("GATC"), 'x');
    trie.insert(&bases("GATC"), 'x');
    assert_eq!(trie.find(&bases("GATC"), true), vec!['x', 'x']);
}

#[test]
fn test_seed_search_reports_every_indexed_position() {
    let sequence = random_sequence(7, 300);
    let mut index = FragmentIndex::new(8);
    index.add_genome(genome("random", &sequence));

    for position in (0..=sequence.len() - 8).step_by(13) {
        let seed = &sequence[position..position + 8];
        let hits = index.search(seed, 8, true).unwrap();
        let hit = hits
            .iter()
            .find(|h| h.genome_name == "random")
            .expect("seed must be found");
        // the lowest occurrence is reported, which can only be at or before this one
        assert!(hit.position <= position);
        assert_eq!(hit.length, 8);
        assert_eq!(&sequence[hit.position..hit.position + 8], seed);
    }
}

#[test]
fn test_extract_search_round_trip() {
    let sequences = [
        random_sequence(11, 200),
        random_sequence(23, 150),
    ];
    let index = FragmentIndex::with_genomes(
        6,
        sequences
            .iter()
            .enumerate()
            .map(|(i, s)| genome(&format!("g{i}"), s)),
    );

    for (i, sequence) in sequences.iter().enumerate() {
        let g = index.genome(i).unwrap();
        for (position, length) in [(0, 6), (5, 20), (40, 33), (sequence.len() - 12, 12)] {
            let fragment: String = g
                .extract(position, length)
                .unwrap()
                .iter()
                .map(|b| b.as_char())
                .collect();
            let hits = index.search(&fragment, length, true).unwrap();
            let expected = FragmentMatch {
                genome_name: format!("g{i}"),
                position,
                length,
            };
            if length == 6 {
                // seed-length searches collapse to the lowest position per genome
                assert!(hits.iter().any(|h| h.genome_name == expected.genome_name));
            } else {
                assert!(hits.contains(&expected), "{expected:?} not in {hits:?}");
            }
        }
    }
}

#[test]
fn test_reported_matches_stay_inside_genome() {
    let sequence = random_sequence(5, 120);
    let index = FragmentIndex::with_genomes(4, vec![genome("g", &sequence)]);

    let fragment = &sequence[100..120];
    for exact_only in [true, false] {
        for h in index.search(fragment, 4, exact_only).unwrap() {
            assert!(h.position + h.length <= sequence.len());
            assert!(h.length >= 4);
        }
    }
}

#[test]
fn test_two_genome_single_mismatch_scenario() {
    let index = FragmentIndex::with_genomes(
        3,
        vec![genome("first", "AAACGT"), genome("second", "AAATGT")],
    );
    let hits = index.search("AAACGT", 4, false).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].genome_name, "first");
    assert_eq!(hits[0].length, 6);
    assert_eq!(hits[1].genome_name, "second");
    assert_eq!(hits[1].length, 6);
}

#[test]
fn test_minimum_length_longer_than_fragment_fails() {
    let index = FragmentIndex::with_genomes(3, vec![genome("g", "ACGTACGT")]);
    let err = index.search("ACGT", 5, false).unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, MatchError::FragmentShorterThanMinimum { .. }));
}

#[test]
fn test_empty_index_reports_no_match() {
    let index = FragmentIndex::new(4);
    for fragment in ["ACGT", "ACGTACGT", "NNNN"] {
        assert_eq!(index.search(fragment, 4, false), Err(MatchError::NoMatches));
    }
    let query = genome("q", "ACGTACGT");
    assert_eq!(
        index.find_related(&query, 4, false, 0.0),
        Err(MatchError::NoMatches)
    );
}

#[test]
fn test_threshold_boundary() {
    // query blocks: AAAAAA CCCCCC GGGGGG TTTTTT
    let query = genome("q", "AAAAAACCCCCCGGGGGGTTTTTT");
    let index = FragmentIndex::with_genomes(
        3,
        vec![
            genome("three", "AAAAAACCCCCCGGGGGG"),
            genome("two", "AAAAAACCCCCC"),
        ],
    );

    let at_three = index.find_related(&query, 6, true, 75.0).unwrap();
    assert_eq!(at_three.len(), 1);
    assert_eq!(at_three[0].genome_name, "three");
    assert!((at_three[0].percent_match - 75.0).abs() < 1e-9);

    let at_two = index.find_related(&query, 6, true, 50.0).unwrap();
    let names: Vec<&str> = at_two.iter().map(|r| r.genome_name.as_str()).collect();
    assert_eq!(names, vec!["three", "two"]);
}

#[test]
fn test_related_ordering_is_deterministic() {
    let query = genome("q", "ACGTTGCAGGCCTTAA");
    let index = FragmentIndex::with_genomes(
        4,
        vec![
            genome("zeta", "ACGTTGCA"),
            genome("alpha", "ACGTTGCA"),
            genome("Mid", "ACGTTGCAGGCCTTAA"),
            genome("beta", "ACGTTGCA"),
        ],
    );

    let first = index.find_related(&query, 8, true, 0.0).unwrap();
    for _ in 0..5 {
        assert_eq!(index.find_related(&query, 8, true, 0.0).unwrap(), first);
    }

    let names: Vec<&str> = first.iter().map(|r| r.genome_name.as_str()).collect();
    assert_eq!(names, vec!["Mid", "alpha", "beta", "zeta"]);
}

#[test]
fn test_overcounting_is_opt_out() {
    // the single query block occurs twice in "repeat"
    let query = genome("q", "GATTACA");
    let index = FragmentIndex::with_genomes(
        4,
        vec![genome("repeat", "GATTACAGATTACA")],
    );

    let per_match = index.find_related(&query, 7, true, 0.0).unwrap();
    assert!((per_match[0].percent_match - 200.0).abs() < 1e-9);

    let config = MatchingConfig {
        block_counting: BlockCounting::PerBlock,
    };
    let per_block = MatchingEngine::with_config(&index, config)
        .find_related(&query, 7, true, 0.0)
        .unwrap();
    assert!((per_block[0].percent_match - 100.0).abs() < 1e-9);
}

#[test]
fn test_near_related_tolerates_one_substitution_per_block() {
    let index = FragmentIndex::with_genomes(4, vec![genome("g", "ACGTACGTACGT")]);
    // each 6-base block differs from the genome at one non-initial base
    let query = genome("q", "ACGAACGTACCT");

    assert_eq!(
        index.find_related(&query, 6, true, 1.0),
        Err(MatchError::NoMatches)
    );
    let near = index.find_related(&query, 6, false, 100.0).unwrap();
    assert_eq!(near[0].genome_name, "g");
}
