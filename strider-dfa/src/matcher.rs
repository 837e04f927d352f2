// Matcher - linear scan over a transition table
//
// One table lookup per text symbol. The state is never reset after a match:
// the accepting state has ordinary fallback edges, so overlapping
// occurrences are found without re-reading any input.

use crate::alphabet::Symbol;
use crate::table::TransitionTable;
use crate::{DfaError, DfaResult};
use serde::{Deserialize, Serialize};
use std::iter::Enumerate;
use std::slice;
use tracing::trace;

/// A full pattern occurrence in the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchPosition {
    /// Zero-based offset of the first matched symbol
    pub start: usize,

    /// Offset one past the last matched symbol
    pub end: usize,
}

impl MatchPosition {
    /// Number of matched symbols (the pattern length)
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for positions produced by a scan
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Lazy iterator over the matches of one scan
///
/// Yields `Err(SymbolOutOfRange)` once at the first symbol outside the
/// table's alphabet and ends there.
pub struct MatchIter<'a, S> {
    table: &'a TransitionTable,
    symbols: Enumerate<slice::Iter<'a, S>>,
    state: usize,
    failed: bool,
}

impl<'a, S: Symbol> MatchIter<'a, S> {
    fn new(table: &'a TransitionTable, text: &'a [S]) -> Self {
        Self {
            table,
            symbols: text.iter().enumerate(),
            state: table.initial_state(),
            failed: false,
        }
    }

    /// Current automaton state
    pub fn state(&self) -> usize {
        self.state
    }
}

impl<S: Symbol> Iterator for MatchIter<'_, S> {
    type Item = DfaResult<MatchPosition>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let alphabet = self.table.alphabet();
        let accepting = self.table.accepting_state();

        for (index, &symbol) in self.symbols.by_ref() {
            let code = match alphabet.check(symbol, index) {
                Ok(code) => code,
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            };

            self.state = self.table.step(self.state, code);

            if self.state == accepting {
                return Some(Ok(MatchPosition {
                    start: index + 1 - accepting,
                    end: index + 1,
                }));
            }
        }

        None
    }
}

/// Iterate over matches of `table` in `text`
pub fn find_iter<'a, S: Symbol>(table: &'a TransitionTable, text: &'a [S]) -> MatchIter<'a, S> {
    MatchIter::new(table, text)
}

/// Find every occurrence, in increasing start order
///
/// Fails on the first out-of-range symbol; no partial result is returned.
pub fn search<S: Symbol>(
    table: &TransitionTable,
    pattern_len: usize,
    text: &[S],
) -> DfaResult<Vec<MatchPosition>> {
    check_pattern_len(table, pattern_len)?;

    let matches = find_iter(table, text).collect::<DfaResult<Vec<_>>>()?;

    trace!(
        text_len = text.len(),
        matches = matches.len(),
        "Scan complete"
    );

    Ok(matches)
}

/// Like [`search`] but stops once `max` matches have been found
///
/// Symbols after the last reported match are not inspected.
pub fn search_limit<S: Symbol>(
    table: &TransitionTable,
    pattern_len: usize,
    text: &[S],
    max: usize,
) -> DfaResult<Vec<MatchPosition>> {
    check_pattern_len(table, pattern_len)?;
    find_iter(table, text).take(max).collect()
}

/// Like [`search`] but stops after the first match for which `stop` returns
/// true; that match is included in the result.
pub fn search_until<S, F>(
    table: &TransitionTable,
    pattern_len: usize,
    text: &[S],
    mut stop: F,
) -> DfaResult<Vec<MatchPosition>>
where
    S: Symbol,
    F: FnMut(&MatchPosition) -> bool,
{
    check_pattern_len(table, pattern_len)?;

    let mut matches = Vec::new();
    for found in find_iter(table, text) {
        let found = found?;
        matches.push(found);
        if stop(&found) {
            break;
        }
    }

    Ok(matches)
}

/// First occurrence, if any
pub fn find_first<S: Symbol>(
    table: &TransitionTable,
    text: &[S],
) -> DfaResult<Option<MatchPosition>> {
    find_iter(table, text).next().transpose()
}

/// Whether `text` contains the pattern at all
pub fn is_match<S: Symbol>(table: &TransitionTable, text: &[S]) -> DfaResult<bool> {
    Ok(find_first(table, text)?.is_some())
}

fn check_pattern_len(table: &TransitionTable, pattern_len: usize) -> DfaResult<()> {
    if table.pattern_len() != pattern_len {
        return Err(DfaError::TableMismatch {
            expected: pattern_len,
            actual: table.pattern_len(),
        });
    }
    Ok(())
}
