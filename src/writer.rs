//! Writing the combined table to a new dated workbook.

use crate::config::OUTPUT_SUFFIX;
use crate::error::{Result, UnifyError};
use crate::table::{MergedTable, ResultTable, LAST_REPLICATION_INDEX};
use chrono::NaiveDateTime;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Output filename: `<base> - <MMDDYYYY> - Union_LogShipping.xlsx`.
pub fn output_filename(base_name: &str, now: NaiveDateTime) -> String {
    format!("{} - {} - {}", base_name, now.format("%m%d%Y"), OUTPUT_SUFFIX)
}

/// Timestamp text stored in the last-replication column.
pub fn replication_timestamp(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Stamp `table` with `now` and write it to `dir`, returning the written path.
///
/// An existing workbook with the same name (same base name, same day) is
/// overwritten.
pub fn save_result(
    table: MergedTable,
    dir: &Path,
    base_name: &str,
    now: NaiveDateTime,
) -> Result<PathBuf> {
    let result = table.stamp(replication_timestamp(now));
    let path = dir.join(output_filename(base_name, now));

    write_workbook(&result, &path).map_err(|e| UnifyError::FileWrite {
        path: path.clone(),
        source: Arc::new(e),
    })?;

    log::info!("Saved {} row(s) to {}", result.rows.len(), path.display());
    Ok(path)
}

fn write_workbook(result: &ResultTable, path: &Path) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header_fmt = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, header) in ResultTable::headers().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_fmt)?;
    }

    let stamp_col = LAST_REPLICATION_INDEX as u16;
    for (i, row) in result.rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_number(r, 0, row.ordering as f64)?;
        if let Some(pair) = &row.db_pair {
            sheet.write_string(r, 1, pair)?;
        }
        sheet.write_string(r, stamp_col, &result.last_replication)?;
    }

    sheet.set_column_width(1, 40)?;
    sheet.set_column_width(stamp_col, 20)?;

    workbook.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MergedRow;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(
            output_filename("Transaction Log Shipping Status", at(2026, 3, 7, 9, 5, 0)),
            "Transaction Log Shipping Status - 03072026 - Union_LogShipping.xlsx"
        );
    }

    #[test]
    fn test_replication_timestamp() {
        assert_eq!(
            replication_timestamp(at(2026, 3, 7, 9, 5, 1)),
            "2026-03-07 09:05:01"
        );
    }

    #[test]
    fn test_save_result_layout() {
        let dir = tempfile::tempdir().unwrap();
        let table = MergedTable {
            rows: vec![
                MergedRow {
                    ordering: 5,
                    db_pair: Some("A -- B".to_string()),
                },
                MergedRow {
                    ordering: 3,
                    db_pair: None,
                },
            ],
        };
        let now = at(2026, 10, 19, 14, 30, 0);
        let path = save_result(table, dir.path(), "Report", now).unwrap();
        assert_eq!(path, dir.path().join("Report - 10192026 - Union_LogShipping.xlsx"));

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Sheet1".to_string()]);
        let range = workbook.worksheet_range("Sheet1").unwrap();
        assert_eq!(range.get_size(), (3, 3));

        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows[0][0], Data::String("Time Since Last".into()));
        assert_eq!(
            rows[0][1],
            Data::String("Primary Database \n -- Secondary Database".into())
        );
        assert_eq!(rows[0][2], Data::String("Last Replication".into()));
        assert_eq!(rows[1][0], Data::Float(5.0));
        assert_eq!(rows[1][1], Data::String("A -- B".into()));
        assert_eq!(rows[1][2], Data::String("2026-10-19 14:30:00".into()));
        assert_eq!(rows[2][0], Data::Float(3.0));
        assert_eq!(rows[2][1], Data::Empty);
        assert_eq!(rows[2][2], Data::String("2026-10-19 14:30:00".into()));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let table = MergedTable {
            rows: vec![MergedRow {
                ordering: 1,
                db_pair: None,
            }],
        };
        let err = save_result(table, &missing, "Report", at(2026, 1, 2, 3, 4, 5)).unwrap_err();
        assert!(matches!(err, UnifyError::FileWrite { .. }));
        assert!(!missing.exists());
    }
}
