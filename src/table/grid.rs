use super::{BORDER, CELL_SEPARATOR, is_divider_text};
use crate::error::{ReportError, Result};

/// Rectangular grid of trimmed cells taken from one bordered block.
///
/// Cells borrow from the block text. Every row has the same number of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid<'a> {
    rows: Vec<Vec<&'a str>>,
    had_divider: bool,
}

impl<'a> CellGrid<'a> {
    /// Splits a block that starts and ends with `+` into cells, dropping the
    /// outer borders and the header divider when one follows the first row.
    pub fn parse(block: &'a str) -> Result<Self> {
        if !block.starts_with(BORDER) || !block.ends_with(BORDER) {
            return Err(ReportError::malformed_table(format!(
                "a table must start and end with '{BORDER}'"
            )));
        }

        let mut lines = block
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect::<Vec<&str>>();
        if lines.len() < 3 {
            return Err(ReportError::malformed_table(format!(
                "a table needs at least a top border, one line of content and a bottom border, found {} line(s)",
                lines.len()
            )));
        }

        lines.remove(0);
        lines.pop();

        let had_divider = lines
            .get(1)
            .map(|line| is_divider_text(line.trim()))
            .unwrap_or(false);
        if had_divider {
            lines.remove(1);
        }

        let rows = lines.into_iter().map(split_cells).collect::<Vec<_>>();

        let column_count = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != column_count)
        {
            return Err(ReportError::malformed_table(format!(
                "every row should have {column_count} column(s), row {index} has {}",
                row.len()
            )));
        }

        Ok(Self { rows, had_divider })
    }

    pub fn rows(&self) -> &[Vec<&'a str>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Whether a header divider line followed the first row and was removed.
    pub fn had_divider(&self) -> bool {
        self.had_divider
    }
}

fn split_cells(line: &str) -> Vec<&str> {
    let line = line.trim_end();
    let line = line.strip_prefix(CELL_SEPARATOR).unwrap_or(line);
    let line = line.strip_suffix(CELL_SEPARATOR).unwrap_or(line);

    line.split(CELL_SEPARATOR).map(str::trim).collect()
}
