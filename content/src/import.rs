//! Bulk MCQ import from spreadsheet pastes.
//!
//! Expected row layout (tab separated, one question per line):
//! `question, option A, option B, option C, option D, answer (1-4), explanation?`
//!
//! ERROR HANDLING
//! ==============
//! A paste with no tab anywhere is rejected whole. Individual bad rows are
//! skipped and listed in the report so the caller can show a count; no row
//! is ever half-imported.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use crate::record::{McqItem, OPTION_COUNT};

/// Minimum columns for a row: question, four options, answer ordinal.
const MIN_COLUMNS: usize = 6;

#[allow(clippy::cast_possible_wrap)]
const MAX_ORDINAL: i64 = OPTION_COUNT as i64;

/// Whole-paste rejection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("nothing to import")]
    Empty,
    #[error("please use tab-separated values (copy the rows from a spreadsheet)")]
    NoTabs,
}

/// Why a row was left out of the import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    TooFewColumns(usize),
    InvalidAnswer(String),
}

/// A row that did not produce a question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number among the non-blank lines of the paste.
    pub line: usize,
    pub reason: SkipReason,
}

/// Outcome of parsing one paste.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub items: Vec<McqItem>,
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    #[must_use]
    pub fn imported(&self) -> usize {
        self.items.len()
    }

    /// User-facing summary, e.g. `"Imported 3 questions (1 row skipped)"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let imported = self.items.len();
        let noun = if imported == 1 { "question" } else { "questions" };
        match self.skipped.len() {
            0 => format!("Imported {imported} {noun}"),
            1 => format!("Imported {imported} {noun} (1 row skipped)"),
            n => format!("Imported {imported} {noun} ({n} rows skipped)"),
        }
    }
}

/// Parse tab-separated question rows.
///
/// # Errors
///
/// Returns [`ImportError::Empty`] for blank input and [`ImportError::NoTabs`]
/// when the paste contains no tab character at all.
pub fn parse_tsv(text: &str) -> Result<ImportReport, ImportError> {
    let raw = text.trim();
    if raw.is_empty() {
        return Err(ImportError::Empty);
    }
    if !raw.contains('\t') {
        return Err(ImportError::NoTabs);
    }

    let mut report = ImportReport::default();
    let lines = raw.lines().filter(|l| !l.trim().is_empty());
    for (idx, line) in lines.enumerate() {
        match parse_row(line) {
            Ok(item) => report.items.push(item),
            Err(reason) => report.skipped.push(SkippedRow { line: idx + 1, reason }),
        }
    }
    log::debug!("mcq import: {} rows imported, {} skipped", report.items.len(), report.skipped.len());
    Ok(report)
}

fn parse_row(line: &str) -> Result<McqItem, SkipReason> {
    let cols: Vec<&str> = line.trim_end_matches('\r').split('\t').collect();
    if cols.len() < MIN_COLUMNS {
        return Err(SkipReason::TooFewColumns(cols.len()));
    }

    let ordinal = cols[5].trim();
    let correct_answer = match ordinal.parse::<i64>() {
        Ok(n) if (1..=MAX_ORDINAL).contains(&n) => n - 1,
        _ => return Err(SkipReason::InvalidAnswer(ordinal.to_owned())),
    };

    Ok(McqItem {
        question: cols[0].to_owned(),
        options: [cols[1].to_owned(), cols[2].to_owned(), cols[3].to_owned(), cols[4].to_owned()],
        correct_answer,
        explanation: cols.get(6).map_or_else(String::new, |s| (*s).to_owned()),
    })
}
