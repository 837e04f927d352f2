// Strider DFA - Single-Pattern String Matching Automaton
//!
// This crate builds a deterministic finite automaton for one pattern with a
// transition defined for every (state, symbol) pair, then scans text through
// it in a single linear pass with no backtracking.
//
// ## Overview
//
// States are `0..=P` where `P` is the pattern length. State `0` is initial,
// state `P` is accepting but not terminal: scanning continues from it, so
// overlapping occurrences are reported.
//
// ## Architecture
//
// ```text
// ┌─────────────────────────────────────────────────┐
// │           TableBuilder                          │
// │  (longest prefix that is also a suffix)         │
// └──────────────┬──────────────────────────────────┘
//                │
//                v
// ┌─────────────────────────────────────────────────┐
// │         TransitionTable                         │
// │  (P+1) x |alphabet| states, row-major           │
// └──────────────┬──────────────────────────────────┘
//                │
//                v
// ┌─────────────────────────────────────────────────┐
// │         Matcher / Report                        │
// │  - search: Vec<MatchPosition>                   │
// │  - describe: AutomatonReport                    │
// └─────────────────────────────────────────────────┘
// ```

mod alphabet;
mod automaton;
mod builder;
mod matcher;
mod metrics;
mod pattern;
mod report;
mod table;

#[cfg(test)]
mod perf;

pub use alphabet::{Alphabet, Symbol};
pub use automaton::{Automaton, CompiledAutomaton};
pub use builder::{build, Construction, TableBuilder};
pub use matcher::{
    find_first, find_iter, is_match, search, search_limit, search_until, MatchIter,
    MatchPosition,
};
pub use metrics::{AutomatonMetrics, MetricsSnapshot};
pub use pattern::Pattern;
pub use report::{describe, AutomatonReport, ReportColumn, StateRow};
pub use table::TransitionTable;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building or running the automaton
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DfaError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Pattern too long: {length} symbols (max: {max})")]
    PatternTooLong { length: usize, max: usize },

    #[error("Symbol {symbol} at position {position} is outside the alphabet of {alphabet_size} symbols")]
    SymbolOutOfRange {
        symbol: usize,
        position: usize,
        alphabet_size: usize,
    },

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Transition table built for pattern length {actual}, expected {expected}")]
    TableMismatch { expected: usize, actual: usize },

    #[error("Automaton has not been built")]
    NotBuilt,
}

/// Result type for DFA operations
pub type DfaResult<T> = Result<T, DfaError>;

/// Configuration for building automata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DfaConfig {
    /// Symbol set every state must cover
    pub alphabet: Alphabet,

    /// Maximum pattern length in symbols (0 = unlimited)
    pub max_pattern_length: usize,

    /// Table construction strategy
    pub construction: Construction,
}

impl Default for DfaConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::BYTES,
            max_pattern_length: 4096,
            construction: Construction::PrefixFunction,
        }
    }
}
