//! Human-readable output
//!
//! Turns search results and automaton reports into text tables.

use serde::Serialize;
use std::fmt::Write;
use strider_dfa::{AutomatonReport, MatchPosition, ReportColumn};

/// Result of one `search` invocation, ready for printing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub pattern: String,
    pub pattern_len: usize,
    pub text_len: usize,
    pub state_count: usize,
    pub matches: Vec<usize>,
    pub truncated: bool,
}

impl SearchOutcome {
    pub fn new(
        pattern: String,
        pattern_len: usize,
        text_len: usize,
        matches: &[MatchPosition],
        limit: Option<usize>,
    ) -> Self {
        Self {
            pattern,
            pattern_len,
            text_len,
            state_count: pattern_len + 1,
            matches: matches.iter().map(|m| m.start).collect(),
            truncated: limit.is_some_and(|max| matches.len() >= max),
        }
    }
}

pub fn render_search(outcome: &SearchOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Searching for '{}' in {} symbols of text",
        outcome.pattern, outcome.text_len
    );
    let _ = writeln!(out, "Pattern length: {}", outcome.pattern_len);
    let _ = writeln!(out, "Automaton states: {}", outcome.state_count);
    out.push('\n');

    if outcome.matches.is_empty() {
        out.push_str("Pattern not found\n");
        return out;
    }

    let positions: Vec<String> = outcome.matches.iter().map(|p| p.to_string()).collect();
    let _ = writeln!(out, "Found at positions: {}", positions.join(", "));
    let _ = writeln!(out, "Total occurrences: {}", outcome.matches.len());
    if outcome.truncated {
        out.push_str("(stopped at match limit)\n");
    }
    out
}

/// Printable label for a symbol code
pub fn symbol_label(code: u32) -> String {
    match char::from_u32(code) {
        Some(c) if !c.is_control() && !c.is_whitespace() => c.to_string(),
        _ => format!("0x{:02x}", code),
    }
}

fn column_label(column: &ReportColumn) -> String {
    match column {
        ReportColumn::Symbol(code) => symbol_label(*code),
        ReportColumn::Other(_) => "other".to_string(),
    }
}

pub fn render_report(report: &AutomatonReport) -> String {
    let pattern: String = report.pattern.iter().map(|&c| symbol_label(c)).collect();
    let mut out = String::new();

    let _ = writeln!(out, "TRANSITION TABLE FOR PATTERN: {}", pattern);
    out.push('\n');
    let _ = writeln!(out, "States: {}", report.state_count);
    let _ = writeln!(out, "Accepting state: q{}", report.accepting_state);
    out.push('\n');

    let state_width = format!("q{}", report.accepting_state).len().max("State".len());
    let labels: Vec<String> = report.columns.iter().map(column_label).collect();
    let widths: Vec<usize> = labels
        .iter()
        .map(|l| l.chars().count().max(state_width))
        .collect();

    let mut header = format!("{:<w$}", "State", w = state_width);
    for (label, width) in labels.iter().zip(&widths) {
        let _ = write!(header, " | {:<w$}", label, w = width);
    }
    let _ = writeln!(out, "{}", header.trim_end());
    let _ = writeln!(out, "{}", "-".repeat(header.trim_end().chars().count()));

    let mut irregular = false;
    for row in &report.rows {
        let mut line = format!("{:<w$}", format!("q{}", row.state), w = state_width);
        for (target, width) in row.targets.iter().zip(&widths) {
            let _ = write!(line, " | {:<w$}", format!("q{}", target), w = width);
        }
        if !row.other_uniform {
            irregular = true;
            line.push_str(" *");
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    out.push('\n');
    out.push_str("Legend:\n");
    let _ = writeln!(out, "- q{} is the initial state", report.initial_state);
    out.push_str("- a matching symbol advances to the next state\n");
    out.push_str("- any other symbol falls back to the longest pattern prefix that is\n");
    out.push_str("  also a suffix of the input read so far\n");
    if let Some(ReportColumn::Other(code)) = report.other_column() {
        let _ = writeln!(
            out,
            "- 'other' shows symbol {} as a sample of symbols absent from the pattern",
            symbol_label(code)
        );
    }
    if irregular {
        out.push_str("- rows marked * do not send every absent symbol to the same state\n");
    }

    out
}
