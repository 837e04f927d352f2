// Pattern type
//
// An immutable, validated sequence of symbol codes that defines an automaton.

use crate::alphabet::{Alphabet, Symbol};
use crate::{DfaConfig, DfaError, DfaResult};
use serde::Serialize;
use std::fmt;

/// A non-empty pattern whose symbols all lie inside one alphabet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    symbols: Vec<u32>,
    alphabet: Alphabet,
}

impl Pattern {
    /// Validate `symbols` against `config` and take ownership of their codes
    pub fn new<S, I>(symbols: I, config: &DfaConfig) -> DfaResult<Self>
    where
        S: Symbol,
        I: IntoIterator<Item = S>,
    {
        let alphabet = config.alphabet;
        alphabet.validate()?;

        let symbols = symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| alphabet.check(symbol, position).map(|code| code as u32))
            .collect::<DfaResult<Vec<u32>>>()?;

        if symbols.is_empty() {
            return Err(DfaError::InvalidPattern(
                "Pattern cannot be empty".to_string(),
            ));
        }

        // States are stored as u32, so P itself must fit
        let max = match config.max_pattern_length {
            0 => u32::MAX as usize,
            max => max,
        };
        if symbols.len() > max {
            return Err(DfaError::PatternTooLong {
                length: symbols.len(),
                max,
            });
        }

        Ok(Self { symbols, alphabet })
    }

    /// Create a byte pattern with the default configuration
    pub fn from_bytes(bytes: &[u8]) -> DfaResult<Self> {
        Self::new(bytes.iter().copied(), &DfaConfig::default())
    }

    /// Create a character pattern with the default configuration
    pub fn from_chars(text: &str) -> DfaResult<Self> {
        Self::new(text.chars(), &DfaConfig::default())
    }

    /// Pattern length `P`
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a validated pattern
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol code at `index`
    #[inline]
    pub fn code_at(&self, index: usize) -> usize {
        self.symbols[index] as usize
    }

    /// All symbol codes
    pub fn codes(&self) -> &[u32] {
        &self.symbols
    }

    /// Alphabet the pattern was validated against
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &code in &self.symbols {
            match char::from_u32(code) {
                Some(c) if !c.is_control() => write!(f, "{}", c)?,
                _ => write!(f, "\\u{{{:x}}}", code)?,
            }
        }
        Ok(())
    }
}
