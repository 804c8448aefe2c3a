//! Genome loader for FASTA files using noodles.
//!
//! Each record becomes one [`Genome`]. The record name is the definition line
//! (name and description). The separator between the two is normalised to a
//! single space, so `>chr1\tassembled` is named `chr1 assembled`. Bases are folded to upper case and must be
//! `A`, `C`, `G`, `T` or `N`; anything else rejects the whole file, as does a
//! record without bases.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::debug;

use crate::core::genome::{Genome, GenomeError};
use crate::utils::validation::{check_genome_limit, MAX_GENOMES};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error(transparent)]
    InvalidSequence(#[from] GenomeError),

    #[error("Too many genomes: {0} exceeds maximum allowed ({MAX_GENOMES})")]
    TooManyGenomes(usize),
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Load every genome from a FASTA file, decompressing `.gz`/`.bgz` input.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidSequence` for a non-`ACGTN` base,
/// `ParseError::InvalidFormat` if a record has no bases or the file has no
/// records, or `ParseError::TooManyGenomes` if the limit is exceeded.
pub fn load_genomes(path: &Path) -> Result<Vec<Genome>, ParseError> {
    let file = std::fs::File::open(path)?;
    let genomes = if is_gzipped(path) {
        load_genomes_from_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        load_genomes_from_reader(BufReader::new(file))?
    };

    debug!("Loaded {} genomes from {}", genomes.len(), path.display());
    Ok(genomes)
}

/// Load every genome from FASTA text
///
/// # Errors
///
/// See [`load_genomes`].
pub fn load_genomes_from_reader<R: BufRead>(reader: R) -> Result<Vec<Genome>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut genomes = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if check_genome_limit(genomes.len()).is_some() {
            return Err(ParseError::TooManyGenomes(genomes.len()));
        }

        let mut name = String::from_utf8_lossy(record.name()).to_string();
        if let Some(description) = record.description() {
            name.push(' ');
            name.push_str(&String::from_utf8_lossy(description));
        }
        if name.trim().is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Record {} has an empty name",
                genomes.len() + 1
            )));
        }

        let sequence = record.sequence().as_ref();
        if sequence.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Record '{name}' has no bases"
            )));
        }

        let text = String::from_utf8_lossy(sequence);
        genomes.push(Genome::from_text(name, &text)?);
    }

    if genomes.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA input".to_string(),
        ));
    }

    Ok(genomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fasta.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Library.FA")));

        assert!(!is_fasta_file(Path::new("test.bam")));
        assert!(!is_fasta_file(Path::new("test.txt")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_load_genomes_from_reader() {
        let text = b">Genome 1\nACGTacgt\nNNAC\n>Genome2\nGGGG\n";
        let genomes = load_genomes_from_reader(&text[..]).unwrap();

        assert_eq!(genomes.len(), 2);
        assert_eq!(genomes[0].name(), "Genome 1");
        assert_eq!(genomes[0].to_sequence_string(), "ACGTACGTNNAC");
        assert_eq!(genomes[1].name(), "Genome2");
        assert_eq!(genomes[1].length(), 4);
    }

    #[test]
    fn test_definition_separator_normalised() {
        let text = b">chr1\tassembled molecule\nACGT\n>chr2   spaced\nACGT\n";
        let genomes = load_genomes_from_reader(&text[..]).unwrap();
        assert_eq!(genomes[0].name(), "chr1 assembled molecule");
        assert_eq!(genomes[1].name(), "chr2 spaced");
    }

    #[test]
    fn test_invalid_base_rejected() {
        let text = b">g\nACGU\n";
        let result = load_genomes_from_reader(&text[..]);
        assert!(matches!(
            result,
            Err(ParseError::InvalidSequence(GenomeError::InvalidBase { .. }))
        ));
    }

    #[test]
    fn test_record_without_bases_rejected() {
        let text = b">empty\n>g\nACGT\n";
        assert!(load_genomes_from_reader(&text[..]).is_err());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(load_genomes_from_reader(&b""[..]).is_err());
    }

    #[test]
    fn test_load_genomes_file() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGTACGT\n>chr2\nTTTT\n").unwrap();
        temp.flush().unwrap();

        let genomes = load_genomes(temp.path()).unwrap();
        assert_eq!(genomes.len(), 2);
        assert_eq!(genomes[0].name(), "chr1");
        assert_eq!(genomes[1].to_sequence_string(), "TTTT");
    }

    #[test]
    fn test_load_gzipped_genomes_file() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">chr1\nACGTN\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let genomes = load_genomes(temp.path()).unwrap();
        assert_eq!(genomes.len(), 1);
        assert_eq!(genomes[0].to_sequence_string(), "ACGTN");
    }
}
