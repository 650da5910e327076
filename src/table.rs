//! In-memory tables passed between the unify stages.

/// Header of the composite "<integer> <free text>" column in the exports.
///
/// The exports carry several columns titled `Time Since Last`; duplicate
/// headers get `.1`, `.2`, ... suffixes and the composite one is the third.
pub const COMPOSITE_COLUMN: &str = "Time Since Last.2";

/// Header of the primary/secondary database pair column.
pub const DB_PAIR_COLUMN: &str = "Primary Database \n -- Secondary Database";

/// Header of the integer ordering column in the combined workbook.
pub const ORDERING_COLUMN: &str = "Time Since Last";

/// Header of the timestamp column appended at save time.
pub const LAST_REPLICATION_COLUMN: &str = "Last Replication";

/// Position of the timestamp column in the combined workbook.
pub const LAST_REPLICATION_INDEX: usize = 2;

/// Value of a non-empty cell as read from an export.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Cell content rendered as text.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }
}

/// One row of an export, restricted to the two columns the unifier needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// Sheet row (1-based, as shown in Excel) the values came from
    pub sheet_row: usize,
    pub composite: Option<CellValue>,
    pub db_pair: Option<CellValue>,
}

impl RawRow {
    pub fn is_empty(&self) -> bool {
        self.composite.is_none() && self.db_pair.is_none()
    }
}

/// The rows loaded from a single export file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Filename the rows were loaded from
    pub source: String,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// A combined row: the integer ordering token and the database pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub ordering: i64,
    pub db_pair: Option<String>,
}

/// All exports concatenated in enumeration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedTable {
    pub rows: Vec<MergedRow>,
}

impl MergedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Attach the save-time timestamp that every output row carries.
    pub fn stamp(self, last_replication: impl Into<String>) -> ResultTable {
        ResultTable {
            rows: self.rows,
            last_replication: last_replication.into(),
        }
    }
}

/// The combined table as written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub rows: Vec<MergedRow>,
    /// Same value on every row, captured once per save
    pub last_replication: String,
}

impl ResultTable {
    /// Output header row, with the timestamp column at [`LAST_REPLICATION_INDEX`].
    pub fn headers() -> [&'static str; 3] {
        let mut headers = [ORDERING_COLUMN, DB_PAIR_COLUMN, ""];
        headers[LAST_REPLICATION_INDEX] = LAST_REPLICATION_COLUMN;
        headers
    }
}
