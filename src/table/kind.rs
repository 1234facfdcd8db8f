use super::{CellGrid, is_divider_text};
use crate::error::{ReportError, Result};
use crate::model::TableKind;

/// Decides whether `grid` holds records or key/value pairs.
///
/// A removed header divider means records. A second row that is not a
/// divider means a dictionary. Otherwise grids wider than two columns are
/// records, and the rest (two columns, one content row) fall back to
/// `ambiguous`.
pub fn resolve_kind(grid: &CellGrid<'_>, ambiguous: TableKind) -> Result<TableKind> {
    let column_count = grid.column_count();

    let structural = if grid.had_divider() {
        Some(TableKind::Record)
    } else {
        grid.rows()
            .get(1)
            .filter(|row| !is_divider_row(row))
            .map(|_| TableKind::Dictionary)
    };

    let kind = match structural {
        Some(kind) => kind,
        None if column_count > 2 => TableKind::Record,
        None => ambiguous,
    };

    if kind == TableKind::Dictionary && column_count != 2 {
        return Err(ReportError::malformed_table(format!(
            "a dictionary table should have exactly two columns, found {column_count}"
        )));
    }

    Ok(kind)
}

fn is_divider_row(cells: &[&str]) -> bool {
    let joined = cells.concat();
    !joined.is_empty() && is_divider_text(&joined)
}
