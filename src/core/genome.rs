use thiserror::Error;

use crate::core::base::{bases_to_string, Base};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenomeError {
    #[error("Invalid base '{character}' at offset {offset} in sequence '{name}'")]
    InvalidBase {
        name: String,
        offset: usize,
        character: char,
    },

    #[error("Range {position}+{length} exceeds sequence length {sequence_length}")]
    OutOfRange {
        position: usize,
        length: usize,
        sequence_length: usize,
    },
}

/// A named, immutable DNA sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    name: String,
    bases: Vec<Base>,
}

impl Genome {
    pub fn new(name: impl Into<String>, bases: Vec<Base>) -> Self {
        Self {
            name: name.into(),
            bases,
        }
    }

    /// Build a genome from text, folding lower-case bases to upper case.
    ///
    /// # Errors
    ///
    /// Returns `GenomeError::InvalidBase` for any character outside `ACGTN`.
    pub fn from_text(name: impl Into<String>, text: &str) -> Result<Self, GenomeError> {
        let name = name.into();
        let mut bases = Vec::with_capacity(text.len());
        for (offset, c) in text.char_indices() {
            let base = u8::try_from(c)
                .ok()
                .and_then(Base::from_ascii_ignore_case)
                .ok_or_else(|| GenomeError::InvalidBase {
                    name: name.clone(),
                    offset,
                    character: c,
                })?;
            bases.push(base);
        }
        Ok(Self { name, bases })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.bases.len()
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// Borrow `length` bases starting at `position`.
    ///
    /// # Errors
    ///
    /// Returns `GenomeError::OutOfRange` if the range reads past the end.
    pub fn extract(&self, position: usize, length: usize) -> Result<&[Base], GenomeError> {
        position
            .checked_add(length)
            .filter(|&end| end <= self.bases.len())
            .map(|end| &self.bases[position..end])
            .ok_or(GenomeError::OutOfRange {
                position,
                length,
                sequence_length: self.bases.len(),
            })
    }

    pub fn to_sequence_string(&self) -> String {
        bases_to_string(&self.bases)
    }
}
