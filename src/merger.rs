//! Concatenation of loaded exports and derivation of the ordering column.

use crate::error::{Result, UnifyError};
use crate::table::{CellValue, MergedRow, MergedTable, RawTable};

/// Concatenate `tables` and split the composite field into its integer token.
///
/// Rows keep their file order and the tables keep the order given; nothing is
/// sorted or de-duplicated. The text after the first whitespace-delimited token
/// is discarded. Any row whose composite value is missing, not text, or does
/// not start with an integer fails the whole merge.
pub fn merge_tables(tables: &[RawTable]) -> Result<MergedTable> {
    if tables.is_empty() {
        return Err(UnifyError::EmptyResult("No tables to merge".to_string()));
    }

    let mut rows = Vec::with_capacity(tables.iter().map(RawTable::len).sum());
    for table in tables {
        for row in &table.rows {
            let parse_error = |value: String| UnifyError::Parse {
                file: table.source.clone(),
                row: row.sheet_row,
                value,
            };

            let ordering = match &row.composite {
                Some(CellValue::Text(s)) => {
                    parse_ordering(s).ok_or_else(|| parse_error(s.clone()))?
                }
                Some(other) => return Err(parse_error(other.to_text())),
                None => return Err(parse_error(String::new())),
            };

            rows.push(MergedRow {
                ordering,
                db_pair: row.db_pair.as_ref().map(CellValue::to_text),
            });
        }
    }

    if rows.is_empty() {
        return Err(UnifyError::EmptyResult(
            "Merged table has no rows".to_string(),
        ));
    }

    log::debug!("Merged {} table(s) into {} row(s)", tables.len(), rows.len());
    Ok(MergedTable { rows })
}

/// First whitespace-delimited token of `value` as an integer.
fn parse_ordering(value: &str) -> Option<i64> {
    let mut parts = value.split_whitespace();
    let token = parts.next()?;
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RawRow;

    fn raw(source: &str, rows: &[(Option<&str>, Option<&str>)]) -> RawTable {
        RawTable {
            source: source.to_string(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, (composite, db_pair))| RawRow {
                    sheet_row: 11 + i,
                    composite: composite.map(|s| CellValue::Text(s.to_string())),
                    db_pair: db_pair.map(|s| CellValue::Text(s.to_string())),
                })
                .collect(),
        }
    }

    #[test]
    fn test_parse_ordering() {
        assert_eq!(parse_ordering("5 OK"), Some(5));
        assert_eq!(parse_ordering("  12   minutes ago"), Some(12));
        assert_eq!(parse_ordering("7"), Some(7));
        assert_eq!(parse_ordering("-3 skew"), Some(-3));
        assert_eq!(parse_ordering("5.0 OK"), None);
        assert_eq!(parse_ordering("OK 5"), None);
        assert_eq!(parse_ordering("   "), None);
    }

    #[test]
    fn test_preserves_concatenation_order() {
        let tables = vec![
            raw("s1.xlsx", &[(Some("5 OK"), Some("A -- B")), (Some("9 Late"), Some("E -- F"))]),
            raw("s2.xlsx", &[(Some("3 OK"), Some("C -- D"))]),
        ];
        let merged = merge_tables(&tables).unwrap();

        let ordering: Vec<i64> = merged.rows.iter().map(|r| r.ordering).collect();
        assert_eq!(ordering, vec![5, 9, 3]);
        assert_eq!(merged.rows[2].db_pair.as_deref(), Some("C -- D"));
    }

    #[test]
    fn test_keeps_duplicates() {
        let tables = vec![
            raw("s1.xlsx", &[(Some("5 OK"), Some("A -- B"))]),
            raw("s2.xlsx", &[(Some("5 OK"), Some("A -- B"))]),
        ];
        assert_eq!(merge_tables(&tables).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_db_pair_is_kept() {
        let tables = vec![raw("s1.xlsx", &[(Some("4 OK"), None)])];
        let merged = merge_tables(&tables).unwrap();
        assert_eq!(merged.rows[0].db_pair, None);
    }

    #[test]
    fn test_non_integer_token_fails() {
        let tables = vec![
            raw("s1.xlsx", &[(Some("5 OK"), Some("A -- B"))]),
            raw("s2.xlsx", &[(Some("3 OK"), Some("C -- D")), (Some("n/a"), Some("E -- F"))]),
        ];
        let err = merge_tables(&tables).unwrap_err();
        match err {
            UnifyError::Parse { file, row, value } => {
                assert_eq!(file, "s2.xlsx");
                assert_eq!(row, 12);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_composite_fails() {
        let tables = vec![raw("s1.xlsx", &[(None, Some("A -- B"))])];
        assert!(matches!(merge_tables(&tables), Err(UnifyError::Parse { .. })));
    }

    #[test]
    fn test_numeric_composite_fails() {
        let mut table = raw("s1.xlsx", &[(Some("5 OK"), Some("A -- B"))]);
        table.rows[0].composite = Some(CellValue::Number(5.0));
        let err = merge_tables(&[table]).unwrap_err();
        assert!(matches!(err, UnifyError::Parse { ref value, .. } if value == "5"));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(merge_tables(&[]), Err(UnifyError::EmptyResult(_))));
        let tables = vec![raw("s1.xlsx", &[])];
        assert!(matches!(merge_tables(&tables), Err(UnifyError::EmptyResult(_))));
    }
}
