// Alphabet and symbol codes
//
// The automaton works on numeric symbol codes. An alphabet is the dense
// range `0..size`; every state carries one transition per code.

use crate::{DfaError, DfaResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Anything that can be fed to the automaton as a single symbol
pub trait Symbol: Copy {
    /// Numeric code of this symbol
    fn code(self) -> usize;
}

impl Symbol for u8 {
    #[inline]
    fn code(self) -> usize {
        self as usize
    }
}

impl Symbol for u16 {
    #[inline]
    fn code(self) -> usize {
        self as usize
    }
}

impl Symbol for u32 {
    #[inline]
    fn code(self) -> usize {
        self as usize
    }
}

impl Symbol for char {
    #[inline]
    fn code(self) -> usize {
        self as usize
    }
}

/// The finite symbol set a transition table covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alphabet {
    size: usize,
}

impl Alphabet {
    /// The 256 single-byte values
    pub const BYTES: Alphabet = Alphabet { size: 256 };

    /// Largest supported alphabet (one row per state is this many cells)
    pub const MAX_SIZE: usize = 1 << 16;

    /// Create an alphabet covering codes `0..size`
    pub fn new(size: usize) -> DfaResult<Self> {
        let alphabet = Self { size };
        alphabet.validate()?;
        Ok(alphabet)
    }

    /// Check the size bounds; deserialized alphabets skip `new`
    pub fn validate(&self) -> DfaResult<()> {
        if self.size == 0 {
            return Err(DfaError::InvalidAlphabet(
                "Alphabet cannot be empty".to_string(),
            ));
        }
        if self.size > Self::MAX_SIZE {
            return Err(DfaError::InvalidAlphabet(format!(
                "Alphabet of {} symbols exceeds the maximum of {}",
                self.size,
                Self::MAX_SIZE
            )));
        }
        Ok(())
    }

    /// Number of symbols
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `code` has a column in tables over this alphabet
    #[inline]
    pub fn contains(&self, code: usize) -> bool {
        code < self.size
    }

    /// Check a symbol found at `position` of some input
    #[inline]
    pub fn check<S: Symbol>(&self, symbol: S, position: usize) -> DfaResult<usize> {
        let code = symbol.code();
        if self.contains(code) {
            Ok(code)
        } else {
            Err(DfaError::SymbolOutOfRange {
                symbol: code,
                position,
                alphabet_size: self.size,
            })
        }
    }

    /// All codes in ascending order
    pub fn codes(&self) -> Range<usize> {
        0..self.size
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BYTES
    }
}
