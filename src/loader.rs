//! Reading one Log Shipping Status export into a [`RawTable`].
//!
//! The report puts a block of title/boilerplate rows above the real header,
//! so the header is the first non-blank row at or after `skip_rows`. Header
//! names are de-duplicated the same way the report's consumers always have:
//! the second `X` becomes `X.1`, the third `X.2`, and a blank header cell is
//! called `Unnamed: <column index>`.

use crate::config::LoadOptions;
use crate::error::{Result, UnifyError};
use crate::table::{CellValue, RawRow, RawTable, COMPOSITE_COLUMN, DB_PAIR_COLUMN};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Load `filename` from `dir`, keeping only the composite and database-pair columns.
///
/// Only the first worksheet is read. Rows where both columns are missing are
/// dropped. A table with zero rows is returned as-is; callers decide whether
/// that counts as a failure.
pub fn load_table(dir: &Path, filename: &str, options: &LoadOptions) -> Result<RawTable> {
    let path = dir.join(filename);
    let mut workbook = open_workbook::<Xlsx<_>, _>(&path).map_err(|e| UnifyError::FileRead {
        path: path.clone(),
        source: Arc::new(e),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| UnifyError::NoWorksheet(path.clone()))?
        .map_err(|e| UnifyError::FileRead {
            path: path.clone(),
            source: Arc::new(e),
        })?;

    let table = table_from_range(filename, &range, options)?;
    log::debug!("Loaded {} row(s) from {}", table.len(), filename);
    Ok(table)
}

/// Extract the two unifier columns from an already opened worksheet.
pub fn table_from_range(
    source: &str,
    range: &Range<Data>,
    options: &LoadOptions,
) -> Result<RawTable> {
    // calamine trims leading empty rows; row numbers here are absolute sheet rows.
    let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);
    let mut rows = range
        .rows()
        .enumerate()
        .map(|(i, cells)| (first_row + i, cells))
        .filter(|(row, _)| *row >= options.skip_rows)
        .filter(|(_, cells)| !is_blank(cells, options));

    let missing = |column: &str| UnifyError::SchemaMismatch {
        file: source.to_string(),
        column: column.to_string(),
    };

    let (_, header_cells) = rows.next().ok_or_else(|| missing(COMPOSITE_COLUMN))?;
    let headers = dedupe_headers(
        header_cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell_value(cell, &[]).map(|v| v.to_text()) {
                Some(name) if !name.is_empty() => name,
                _ => format!("Unnamed: {}", i),
            })
            .collect(),
    );

    let composite_idx = headers
        .iter()
        .position(|h| h == COMPOSITE_COLUMN)
        .ok_or_else(|| missing(COMPOSITE_COLUMN))?;
    let db_pair_idx = headers
        .iter()
        .position(|h| h == DB_PAIR_COLUMN)
        .ok_or_else(|| missing(DB_PAIR_COLUMN))?;

    let rows = rows
        .map(|(row, cells)| RawRow {
            sheet_row: row + 1,
            composite: cells
                .get(composite_idx)
                .and_then(|c| cell_value(c, &options.na_values)),
            db_pair: cells
                .get(db_pair_idx)
                .and_then(|c| cell_value(c, &options.na_values)),
        })
        .filter(|row| !row.is_empty())
        .collect();

    Ok(RawTable {
        source: source.to_string(),
        rows,
    })
}

/// Convert a worksheet cell, mapping empty cells, error cells and NA markers to `None`.
fn cell_value(cell: &Data, na_values: &[String]) -> Option<CellValue> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            if na_values.iter().any(|na| na == s) {
                None
            } else {
                Some(CellValue::Text(s.clone()))
            }
        }
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
    }
}

fn is_blank(cells: &[Data], options: &LoadOptions) -> bool {
    cells
        .iter()
        .all(|c| cell_value(c, &options.na_values).is_none())
}

/// Make header names unique: `A, A, A` becomes `A, A.1, A.2`.
///
/// A generated name that collides with a later literal header keeps counting,
/// so `A, A, A.1` becomes `A, A.1, A.1.1`.
fn dedupe_headers(names: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut unique = Vec::with_capacity(names.len());

    for mut name in names {
        let mut seen = counts.get(&name).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(name.clone(), seen + 1);
            name = format!("{}.{}", name, seen);
            seen = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), seen + 1);
        unique.push(name);
    }

    unique
}
