use super::CellGrid;
use crate::error::{ReportError, Result};
use crate::model::{FieldMap, ParsedTable, TableKind};

/// Converts a grid into the shape selected by `kind`.
pub fn assemble(grid: &CellGrid<'_>, kind: TableKind) -> Result<ParsedTable> {
    match kind {
        TableKind::Dictionary => assemble_dictionary(grid).map(ParsedTable::Dictionary),
        TableKind::Record => assemble_records(grid).map(ParsedTable::Records),
    }
}

fn assemble_dictionary(grid: &CellGrid<'_>) -> Result<FieldMap> {
    let mut entries = FieldMap::with_capacity(grid.row_count());

    for (index, row) in grid.rows().iter().enumerate() {
        let [key, value] = row.as_slice() else {
            return Err(ReportError::malformed_table(format!(
                "dictionary row {index} has {} column(s), expected 2",
                row.len()
            )));
        };
        // Later duplicates overwrite earlier values.
        entries.insert((*key).to_string(), (*value).to_string());
    }

    Ok(entries)
}

fn assemble_records(grid: &CellGrid<'_>) -> Result<Vec<FieldMap>> {
    let Some((header, body)) = grid.rows().split_first() else {
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(body.len());
    for (index, row) in body.iter().enumerate() {
        if row.len() != header.len() {
            return Err(ReportError::malformed_table(format!(
                "record row {} has {} column(s), header has {}",
                index + 1,
                row.len(),
                header.len()
            )));
        }

        let record = header
            .iter()
            .zip(row)
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect::<FieldMap>();
        records.push(record);
    }

    Ok(records)
}
