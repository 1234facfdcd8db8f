//! Bordered ASCII table recognition.
//!
//! A block flows through [`CellGrid::parse`], [`resolve_kind`] and
//! [`assemble`]; [`parse_table`] runs all three.

use tracing::trace;

use crate::error::Result;
use crate::model::{ParsedTable, TableKind};

mod assemble;
mod grid;
mod kind;
#[cfg(test)]
mod tests;

pub use assemble::assemble;
pub use grid::CellGrid;
pub use kind::resolve_kind;

const BORDER: char = '+';
const DIVIDER: char = '-';
const CELL_SEPARATOR: char = '|';

/// Parses one bordered block, using `ambiguous` when the block's structure
/// cannot tell a record table from a dictionary table.
pub fn parse_table(block: &str, ambiguous: TableKind) -> Result<ParsedTable> {
    let grid = CellGrid::parse(block)?;
    let kind = resolve_kind(&grid, ambiguous)?;
    trace!(
        kind = kind.as_str(),
        rows = grid.row_count(),
        columns = grid.column_count(),
        divider = grid.had_divider(),
        "resolved table kind"
    );
    assemble(&grid, kind)
}

fn is_divider_text(text: &str) -> bool {
    text.chars().all(|ch| ch == BORDER || ch == DIVIDER)
}
