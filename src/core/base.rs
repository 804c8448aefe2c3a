use serde::{Deserialize, Serialize};

/// A nucleotide from the fixed alphabet accepted by the index.
///
/// `N` is a wildcard in the input data but is matched literally: an `N` in a
/// query only matches an `N` in a genome (or uses the single substitution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Base {
    A,
    C,
    G,
    T,
    N,
}

impl Base {
    /// Number of distinct bases, and the fan-out of every trie node
    pub const COUNT: usize = 5;

    /// All bases in slot order
    pub const ALL: [Base; Base::COUNT] = [Base::A, Base::C, Base::G, Base::T, Base::N];

    /// Strict conversion: only upper-case `ACGTN` is accepted
    #[must_use]
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            b'N' => Some(Self::N),
            _ => None,
        }
    }

    /// Lenient conversion used when loading sequence files: lower case is folded
    #[must_use]
    pub fn from_ascii_ignore_case(byte: u8) -> Option<Self> {
        Self::from_ascii(byte.to_ascii_uppercase())
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
            Self::N => 'N',
        }
    }

    /// Child slot of this base in a trie node
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parse a strictly upper-case base string.
///
/// Returns the byte offset and value of the first rejected character on failure.
pub fn parse_bases(text: &str) -> Result<Vec<Base>, (usize, char)> {
    text.char_indices()
        .map(|(i, c)| {
            u8::try_from(c)
                .ok()
                .and_then(Base::from_ascii)
                .ok_or((i, c))
        })
        .collect()
}

/// Render a base slice as a string
#[must_use]
pub fn bases_to_string(bases: &[Base]) -> String {
    bases.iter().map(|b| b.as_char()).collect()
}
