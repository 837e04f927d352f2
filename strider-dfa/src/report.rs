// Describe report
//
// Read-only projection of a transition table for diagnostics: one column per
// distinct pattern symbol plus one representative "other" column. Rendering
// is left to the caller.

use crate::pattern::Pattern;
use crate::table::TransitionTable;
use crate::{DfaError, DfaResult};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A column of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "code", rename_all = "snake_case")]
pub enum ReportColumn {
    /// A symbol that occurs in the pattern
    Symbol(u32),

    /// A symbol absent from the pattern, standing in for all such symbols
    Other(u32),
}

impl ReportColumn {
    /// The symbol code whose transitions fill this column
    pub fn code(&self) -> u32 {
        match self {
            ReportColumn::Symbol(code) | ReportColumn::Other(code) => *code,
        }
    }
}

/// Transitions of one state, aligned with the report columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRow {
    pub state: usize,
    pub targets: Vec<usize>,
    pub accepting: bool,

    /// Whether every non-pattern symbol shares the `Other` column's target.
    /// The sampled column is a display convenience; this records whether it
    /// is exact for the row.
    pub other_uniform: bool,
}

/// Structured description of an automaton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonReport {
    pub pattern: Vec<u32>,
    pub alphabet_size: usize,
    pub state_count: usize,
    pub initial_state: usize,
    pub accepting_state: usize,
    pub columns: Vec<ReportColumn>,
    pub rows: Vec<StateRow>,
}

impl AutomatonReport {
    /// Target of `state` in column `column`
    pub fn target(&self, state: usize, column: usize) -> Option<usize> {
        self.rows.get(state)?.targets.get(column).copied()
    }

    /// The `Other` column, if the pattern leaves any symbol unused
    pub fn other_column(&self) -> Option<ReportColumn> {
        self.columns
            .iter()
            .copied()
            .find(|c| matches!(c, ReportColumn::Other(_)))
    }
}

/// Project `table` into a report keyed by the symbols of `pattern`
pub fn describe(table: &TransitionTable, pattern: &Pattern) -> DfaResult<AutomatonReport> {
    if table.pattern_len() != pattern.len() {
        return Err(DfaError::TableMismatch {
            expected: pattern.len(),
            actual: table.pattern_len(),
        });
    }

    let alphabet = table.alphabet();
    for (position, &code) in pattern.codes().iter().enumerate() {
        alphabet.check(code, position)?;
    }

    let mut seen = AHashSet::default();
    let mut columns: Vec<ReportColumn> = pattern
        .codes()
        .iter()
        .copied()
        .filter(|code| seen.insert(*code))
        .map(ReportColumn::Symbol)
        .collect();

    let other = alphabet
        .codes()
        .map(|code| code as u32)
        .find(|code| !seen.contains(code));
    if let Some(code) = other {
        columns.push(ReportColumn::Other(code));
    }

    let rows = table
        .rows()
        .enumerate()
        .map(|(state, row)| {
            let targets = columns
                .iter()
                .map(|column| row[column.code() as usize] as usize)
                .collect();
            let other_uniform = match other {
                Some(rep) => {
                    let expected = row[rep as usize];
                    row.iter()
                        .enumerate()
                        .filter(|(code, _)| !seen.contains(&(*code as u32)))
                        .all(|(_, &target)| target == expected)
                }
                None => true,
            };
            StateRow {
                state,
                targets,
                accepting: state == table.accepting_state(),
                other_uniform,
            }
        })
        .collect();

    Ok(AutomatonReport {
        pattern: pattern.codes().to_vec(),
        alphabet_size: alphabet.size(),
        state_count: table.state_count(),
        initial_state: table.initial_state(),
        accepting_state: table.accepting_state(),
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::builder::TableBuilder;
    use crate::DfaConfig;

    fn report_for(text: &str) -> AutomatonReport {
        let pattern = Pattern::from_bytes(text.as_bytes()).unwrap();
        let table = TableBuilder::new().build(&pattern);
        describe(&table, &pattern).unwrap()
    }

    #[test]
    fn test_report_header() {
        let report = report_for("abab");
        assert_eq!(report.state_count, 5);
        assert_eq!(report.initial_state, 0);
        assert_eq!(report.accepting_state, 4);
        assert_eq!(report.alphabet_size, 256);
        assert_eq!(report.rows.len(), 5);
        assert!(report.rows[4].accepting);
        assert!(!report.rows[0].accepting);
    }

    #[test]
    fn test_report_columns() {
        let report = report_for("abab");
        assert_eq!(
            report.columns,
            vec![
                ReportColumn::Symbol(b'a' as u32),
                ReportColumn::Symbol(b'b' as u32),
                ReportColumn::Other(0),
            ]
        );
        assert_eq!(report.other_column(), Some(ReportColumn::Other(0)));
    }

    #[test]
    fn test_report_targets() {
        let report = report_for("abab");
        assert_eq!(report.rows[3].targets, vec![1, 4, 0]);
        assert_eq!(report.rows[4].targets, vec![3, 0, 0]);
        assert_eq!(report.target(1, 1), Some(2));
        assert_eq!(report.target(9, 0), None);
        assert!(report.rows.iter().all(|r| r.other_uniform));
    }

    #[test]
    fn test_report_full_alphabet_has_no_other() {
        let config = DfaConfig {
            alphabet: Alphabet::new(2).unwrap(),
            ..Default::default()
        };
        let pattern = Pattern::new([0u8, 1, 1], &config).unwrap();
        let table = TableBuilder::with_config(&config).build(&pattern);
        let report = describe(&table, &pattern).unwrap();
        assert_eq!(report.columns.len(), 2);
        assert!(report.other_column().is_none());
    }

    #[test]
    fn test_report_idempotent() {
        let pattern = Pattern::from_bytes(b"abcab").unwrap();
        let table = TableBuilder::new().build(&pattern);
        assert_eq!(
            describe(&table, &pattern).unwrap(),
            describe(&table, &pattern).unwrap()
        );
    }

    #[test]
    fn test_report_mismatch() {
        let pattern = Pattern::from_bytes(b"abc").unwrap();
        let other = Pattern::from_bytes(b"ab").unwrap();
        let table = TableBuilder::new().build(&other);
        assert!(matches!(
            describe(&table, &pattern),
            Err(DfaError::TableMismatch { .. })
        ));
    }

    #[test]
    fn test_report_symbol_outside_table() {
        let small = DfaConfig {
            alphabet: Alphabet::new(4).unwrap(),
            ..Default::default()
        };
        let table = TableBuilder::new().build(&Pattern::new([1u8, 2], &small).unwrap());
        let pattern = Pattern::from_bytes(b"ab").unwrap();
        assert!(matches!(
            describe(&table, &pattern),
            Err(DfaError::SymbolOutOfRange { position: 0, .. })
        ));
    }

    #[test]
    fn test_report_json() {
        let report = report_for("ab");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["accepting_state"], 2);
        assert_eq!(json["columns"][0]["kind"], "symbol");
        assert_eq!(json["columns"][2]["kind"], "other");
    }
}
