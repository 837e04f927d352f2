// Transition table construction
//
// For state `s` and symbol `c` the target is `s + 1` when `c` extends the
// match, otherwise the length of the longest pattern prefix that is a suffix
// of `pattern[..s] + c`. Two strategies compute the same table.

use crate::alphabet::Symbol;
use crate::automaton::CompiledAutomaton;
use crate::pattern::Pattern;
use crate::table::TransitionTable;
use crate::{DfaConfig, DfaResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// How fallback edges are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Construction {
    /// Test every candidate suffix length from longest to shortest: O(P² × |A|)
    Naive,

    /// Reuse the row of the prefix-function fallback state: O(P × |A|)
    #[default]
    PrefixFunction,
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construction::Naive => write!(f, "naive"),
            Construction::PrefixFunction => write!(f, "prefix_function"),
        }
    }
}

/// Builds transition tables for validated patterns
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    construction: Construction,
}

impl TableBuilder {
    /// Create a builder with the default strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder using the strategy from `config`
    pub fn with_config(config: &DfaConfig) -> Self {
        Self {
            construction: config.construction,
        }
    }

    /// Override the strategy
    pub fn construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    /// Build the full `(P + 1) × |A|` table for `pattern`
    pub fn build(&self, pattern: &Pattern) -> TransitionTable {
        let cells = match self.construction {
            Construction::Naive => naive_cells(pattern),
            Construction::PrefixFunction => prefix_function_cells(pattern),
        };

        let table = TransitionTable::from_cells(pattern.alphabet(), pattern.len(), cells);

        debug!(
            pattern_len = pattern.len(),
            states = table.state_count(),
            alphabet_size = pattern.alphabet().size(),
            construction = %self.construction,
            "Built transition table"
        );

        table
    }
}

/// Validate `symbols` and build their automaton in one step
pub fn build<S: Symbol>(symbols: &[S], config: &DfaConfig) -> DfaResult<CompiledAutomaton> {
    let pattern = Pattern::new(symbols.iter().copied(), config)?;
    let table = TableBuilder::with_config(config).build(&pattern);
    Ok(CompiledAutomaton::new(pattern, table))
}

fn naive_cells(pattern: &Pattern) -> Vec<u32> {
    let len = pattern.len();
    let width = pattern.alphabet().size();
    let codes = pattern.codes();
    let mut cells = Vec::with_capacity((len + 1) * width);

    for state in 0..=len {
        for code in 0..width {
            let target = if state < len && pattern.code_at(state) == code {
                state + 1
            } else {
                longest_prefix_suffix(codes, state, code)
            };
            cells.push(target as u32);
        }
    }

    cells
}

/// Greatest `k` such that the last `k` symbols of `pattern[..state] + code`
/// equal `pattern[..k]`, checked from the longest candidate down.
fn longest_prefix_suffix(pattern: &[u32], state: usize, code: usize) -> usize {
    let max = (state + 1).min(pattern.len());
    (1..=max)
        .rev()
        .find(|&k| pattern[k - 1] as usize == code && pattern[state + 1 - k..state] == pattern[..k - 1])
        .unwrap_or(0)
}

/// Classic prefix function: `pi[i]` is the length of the longest proper
/// prefix of `pattern[..=i]` that is also its suffix.
fn prefix_function(pattern: &[u32]) -> Vec<usize> {
    let mut pi = vec![0; pattern.len()];
    let mut k = 0;

    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = pi[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        pi[i] = k;
    }

    pi
}

fn prefix_function_cells(pattern: &Pattern) -> Vec<u32> {
    let len = pattern.len();
    let width = pattern.alphabet().size();
    let pi = prefix_function(pattern.codes());
    let mut cells = vec![0u32; (len + 1) * width];

    for state in 0..=len {
        // Row 0 falls back to itself, which is all zeros already
        if state > 0 {
            let fallback = pi[state - 1];
            cells.copy_within(fallback * width..(fallback + 1) * width, state * width);
        }
        if state < len {
            cells[state * width + pattern.code_at(state)] = (state + 1) as u32;
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::DfaError;

    fn small_config(size: usize, construction: Construction) -> DfaConfig {
        DfaConfig {
            alphabet: Alphabet::new(size).unwrap(),
            construction,
            ..Default::default()
        }
    }

    /// Every pattern of length 1..=max_len over an alphabet of `size` codes
    fn all_patterns(size: u8, max_len: usize) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        let mut frontier: Vec<Vec<u8>> = vec![Vec::new()];
        for _ in 0..max_len {
            let mut next = Vec::new();
            for prefix in &frontier {
                for c in 0..size {
                    let mut p = prefix.clone();
                    p.push(c);
                    next.push(p);
                }
            }
            out.extend(next.iter().cloned());
            frontier = next;
        }
        out
    }

    #[test]
    fn test_prefix_function() {
        assert_eq!(prefix_function(&[0, 1, 0, 1]), vec![0, 0, 1, 2]);
        assert_eq!(prefix_function(&[0, 0, 0]), vec![0, 1, 2]);
        assert_eq!(prefix_function(&[0, 1, 0, 0, 1, 0, 1]), vec![0, 0, 1, 1, 2, 3, 2]);
    }

    #[test]
    fn test_abab_table() {
        let pattern = Pattern::from_bytes(b"abab").unwrap();
        let table = TableBuilder::new().build(&pattern);
        let (a, b, x) = (b'a' as usize, b'b' as usize, b'x' as usize);

        let expected = [
            // (a, b, other)
            (1, 0, 0),
            (1, 2, 0),
            (3, 0, 0),
            (1, 4, 0),
            (3, 0, 0),
        ];
        for (state, &(ta, tb, tx)) in expected.iter().enumerate() {
            assert_eq!(table.next(state, a), Some(ta), "state {} on a", state);
            assert_eq!(table.next(state, b), Some(tb), "state {} on b", state);
            assert_eq!(table.next(state, x), Some(tx), "state {} on x", state);
        }
    }

    #[test]
    fn test_table_shape_and_range() {
        let pattern = Pattern::from_bytes(b"hello").unwrap();
        let table = TableBuilder::new().build(&pattern);
        assert_eq!(table.state_count(), 6);
        assert_eq!(table.rows().count(), 6);
        for row in table.rows() {
            assert_eq!(row.len(), 256);
            assert!(row.iter().all(|&s| s as usize <= pattern.len()));
        }
    }

    #[test]
    fn test_forward_edges() {
        let pattern = Pattern::from_bytes(b"abracadabra").unwrap();
        let table = TableBuilder::new().build(&pattern);
        for state in 0..pattern.len() {
            assert_eq!(table.next(state, pattern.code_at(state)), Some(state + 1));
        }
    }

    #[test]
    fn test_strategies_agree_exhaustively() {
        for size in 1..=3u8 {
            for symbols in all_patterns(size, 6) {
                let naive = build(&symbols, &small_config(size as usize, Construction::Naive))
                    .unwrap();
                let fast = build(
                    &symbols,
                    &small_config(size as usize, Construction::PrefixFunction),
                )
                .unwrap();
                assert_eq!(naive.table(), fast.table(), "pattern {:?}", symbols);
            }
        }
    }

    #[test]
    fn test_strategies_agree_on_bytes() {
        for text in [&b"aabaaab"[..], b"abcabcabd", b"zzzzzz", b"a"] {
            let pattern = Pattern::from_bytes(text).unwrap();
            let naive = TableBuilder::new()
                .construction(Construction::Naive)
                .build(&pattern);
            let fast = TableBuilder::new().build(&pattern);
            assert_eq!(naive, fast);
        }
    }

    #[test]
    fn test_maximality() {
        let symbols = [0u8, 1, 0, 0, 1, 0, 1];
        let compiled = build(&symbols, &small_config(2, Construction::PrefixFunction)).unwrap();
        let table = compiled.table();

        for state in 0..=symbols.len() {
            for code in 0..2u8 {
                let mut seen = symbols[..state].to_vec();
                seen.push(code);
                let k = table.next(state, code as usize).unwrap();
                assert_eq!(&seen[seen.len() - k..], &symbols[..k]);
                for larger in k + 1..=seen.len().min(symbols.len()) {
                    assert_ne!(&seen[seen.len() - larger..], &symbols[..larger]);
                }
            }
        }
    }

    #[test]
    fn test_build_empty_pattern() {
        let result = build::<u8>(&[], &DfaConfig::default());
        assert!(matches!(result, Err(DfaError::InvalidPattern(_))));
    }

    #[test]
    fn test_construction_serde_names() {
        assert_eq!(
            serde_json::to_string(&Construction::PrefixFunction).unwrap(),
            "\"prefix_function\""
        );
        assert_eq!(Construction::Naive.to_string(), "naive");
    }
}
