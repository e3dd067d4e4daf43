//! Display positions for rendered records.
//!
//! Every view numbers its records 1, 2, 3… in filtered order. The number is
//! what the table shows in its index column and what a user passes to `open`
//! to activate a unit. Positions are only meaningful relative to the selection
//! that produced the view: changing a filter renumbers the results.

use crate::error::{Result, ShelfError};
use crate::model::PaperRecord;

/// A record paired with its 1-based position in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRecord<'a> {
    pub position: usize,
    pub record: &'a PaperRecord,
}

/// Numbers `records` in order, starting at 1.
pub fn index_records<'a>(records: &[&'a PaperRecord]) -> Vec<DisplayRecord<'a>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            position: i + 1,
            record,
        })
        .collect()
}

/// Parses a user-supplied position such as `3` or `#3`.
pub fn parse_position(input: &str) -> Result<usize> {
    let digits = input.trim().trim_start_matches('#');
    match digits.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ShelfError::Interaction(format!(
            "Invalid index: {} (expected a number starting at 1)",
            input.trim()
        ))),
    }
}
