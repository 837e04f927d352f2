// Transition table
//
// Total function (state, symbol) -> state stored as one contiguous row-major
// buffer: row `s` holds the targets of state `s` for every alphabet code.

use crate::alphabet::Alphabet;
use serde::Serialize;
use std::fmt;

/// A fully populated transition table for one pattern
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct TransitionTable {
    /// Alphabet the columns cover
    alphabet: Alphabet,

    /// Pattern length `P`; the table has `P + 1` rows
    pattern_len: usize,

    /// `(P + 1) * alphabet.size()` target states
    cells: Vec<u32>,
}

impl TransitionTable {
    /// Wrap a buffer produced by the builder
    pub(crate) fn from_cells(alphabet: Alphabet, pattern_len: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), (pattern_len + 1) * alphabet.size());
        Self {
            alphabet,
            pattern_len,
            cells,
        }
    }

    /// Lookup without bounds checks beyond the slice's own
    #[inline]
    pub(crate) fn step(&self, state: usize, code: usize) -> usize {
        self.cells[state * self.alphabet.size() + code] as usize
    }

    /// Target of `state` on symbol `code`, or `None` if either is out of range
    pub fn next(&self, state: usize, code: usize) -> Option<usize> {
        if state > self.pattern_len || !self.alphabet.contains(code) {
            return None;
        }
        Some(self.step(state, code))
    }

    /// All targets of `state`, indexed by symbol code
    pub fn row(&self, state: usize) -> Option<&[u32]> {
        if state > self.pattern_len {
            return None;
        }
        let width = self.alphabet.size();
        Some(&self.cells[state * width..(state + 1) * width])
    }

    /// Iterate rows in state order
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.alphabet.size())
    }

    /// Pattern length this table was built for
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// Number of states (`P + 1`)
    pub fn state_count(&self) -> usize {
        self.pattern_len + 1
    }

    /// The accepting state `P`
    pub fn accepting_state(&self) -> usize {
        self.pattern_len
    }

    /// Initial state
    pub fn initial_state(&self) -> usize {
        0
    }

    /// Alphabet covered by the columns
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Approximate heap usage in bytes
    pub fn memory_usage(&self) -> usize {
        self.cells.len() * std::mem::size_of::<u32>()
    }
}

impl fmt::Debug for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("pattern_len", &self.pattern_len)
            .field("state_count", &self.state_count())
            .field("alphabet_size", &self.alphabet.size())
            .field("memory_usage", &self.memory_usage())
            .finish()
    }
}
