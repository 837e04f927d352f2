// Automaton - a pattern and its table as one shareable unit
//
// `CompiledAutomaton` is immutable and can be scanned from many threads at
// once. `Automaton` is the rebuildable instance: a new pattern is compiled
// off-lock and published by swapping an `Arc`, so readers always see either
// the old or the new pair, never a partial table.

use crate::alphabet::Symbol;
use crate::builder;
use crate::matcher::{self, MatchIter, MatchPosition};
use crate::metrics::{AutomatonMetrics, MetricsSnapshot};
use crate::pattern::Pattern;
use crate::report::{self, AutomatonReport};
use crate::table::TransitionTable;
use crate::{DfaConfig, DfaError, DfaResult};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A validated pattern together with the table built for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledAutomaton {
    pattern: Pattern,
    table: TransitionTable,
}

impl CompiledAutomaton {
    pub(crate) fn new(pattern: Pattern, table: TransitionTable) -> Self {
        Self { pattern, table }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// All match positions in `text`
    pub fn search<S: Symbol>(&self, text: &[S]) -> DfaResult<Vec<MatchPosition>> {
        matcher::search(&self.table, self.pattern.len(), text)
    }

    /// At most `max` match positions
    pub fn search_limit<S: Symbol>(&self, text: &[S], max: usize) -> DfaResult<Vec<MatchPosition>> {
        matcher::search_limit(&self.table, self.pattern.len(), text, max)
    }

    /// Matches up to and including the first one accepted by `stop`
    pub fn search_until<S, F>(&self, text: &[S], stop: F) -> DfaResult<Vec<MatchPosition>>
    where
        S: Symbol,
        F: FnMut(&MatchPosition) -> bool,
    {
        matcher::search_until(&self.table, self.pattern.len(), text, stop)
    }

    pub fn find_iter<'a, S: Symbol>(&'a self, text: &'a [S]) -> MatchIter<'a, S> {
        matcher::find_iter(&self.table, text)
    }

    pub fn is_match<S: Symbol>(&self, text: &[S]) -> DfaResult<bool> {
        matcher::is_match(&self.table, text)
    }

    pub fn describe(&self) -> DfaResult<AutomatonReport> {
        report::describe(&self.table, &self.pattern)
    }
}

/// A rebuildable automaton instance safe to share across threads
pub struct Automaton {
    config: DfaConfig,
    current: RwLock<Option<Arc<CompiledAutomaton>>>,
    metrics: AutomatonMetrics,
}

impl Automaton {
    /// Create an unbuilt automaton
    pub fn new(config: DfaConfig) -> Self {
        Self {
            config,
            current: RwLock::new(None),
            metrics: AutomatonMetrics::new(),
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(DfaConfig::default())
    }

    /// Compile `symbols` and publish the result
    ///
    /// On failure the previously published automaton, if any, stays in place.
    pub fn build<S: Symbol>(&self, symbols: &[S]) -> DfaResult<Arc<CompiledAutomaton>> {
        let compiled = match builder::build(symbols, &self.config) {
            Ok(compiled) => Arc::new(compiled),
            Err(err) => {
                self.metrics.record_failed_build();
                warn!(error = %err, "Rejected automaton build");
                return Err(err);
            }
        };

        *self.current.write() = Some(Arc::clone(&compiled));
        self.metrics.record_build();

        debug!(
            pattern_len = compiled.pattern().len(),
            "Published automaton"
        );

        Ok(compiled)
    }

    /// The currently published automaton
    pub fn snapshot(&self) -> Option<Arc<CompiledAutomaton>> {
        self.current.read().clone()
    }

    pub fn is_built(&self) -> bool {
        self.current.read().is_some()
    }

    /// Pattern of the currently published automaton
    pub fn pattern(&self) -> Option<Pattern> {
        self.snapshot().map(|c| c.pattern().clone())
    }

    /// Scan `text` with the current automaton
    pub fn search<S: Symbol>(&self, text: &[S]) -> DfaResult<Vec<MatchPosition>> {
        let compiled = self.snapshot().ok_or(DfaError::NotBuilt)?;
        self.record(text.len(), compiled.search(text))
    }

    /// Scan `text`, stopping after `max` matches
    pub fn search_limit<S: Symbol>(&self, text: &[S], max: usize) -> DfaResult<Vec<MatchPosition>> {
        let compiled = self.snapshot().ok_or(DfaError::NotBuilt)?;
        let result = compiled.search_limit(text, max);
        // Only the prefix up to the last match was consumed
        let consumed = match &result {
            Ok(matches) if matches.len() == max => matches.last().map_or(0, |m| m.end),
            _ => text.len(),
        };
        self.record(consumed, result)
    }

    /// Describe the current automaton
    pub fn describe(&self) -> DfaResult<AutomatonReport> {
        self.snapshot().ok_or(DfaError::NotBuilt)?.describe()
    }

    pub fn config(&self) -> &DfaConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn record(
        &self,
        consumed: usize,
        result: DfaResult<Vec<MatchPosition>>,
    ) -> DfaResult<Vec<MatchPosition>> {
        match &result {
            Ok(matches) => self.metrics.record_scan(consumed, matches.len()),
            Err(_) => self.metrics.record_failed_scan(),
        }
        result
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::with_default_config()
    }
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("config", &self.config)
            .field("pattern_len", &self.snapshot().map(|c| c.pattern().len()))
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}
