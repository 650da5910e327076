//! Fixed file-naming and layout conventions for Log Shipping Status exports.

use std::path::PathBuf;

/// Every export the unifier picks up starts with this prefix.
pub const FILE_PREFIX: &str = "Transaction Log Shipping Status -";

/// Substring a candidate filename must contain (anywhere, not only at the end).
pub const FILE_MARKER: &str = ".xlsx";

/// Base name used for the combined workbook.
pub const BASE_NAME: &str = "Transaction Log Shipping Status";

/// Trailing part of every generated workbook name.
pub const OUTPUT_SUFFIX: &str = "Union_LogShipping.xlsx";

/// Leading rows of report boilerplate above the header row.
pub const DEFAULT_SKIP_ROWS: usize = 9;

/// Options for reading a single export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Number of sheet rows to ignore before looking for the header row
    pub skip_rows: usize,
    /// Literal cell texts treated as missing values
    pub na_values: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_rows: DEFAULT_SKIP_ROWS,
            na_values: vec![String::new()],
        }
    }
}

/// Configuration for one unify run.
#[derive(Debug, Clone)]
pub struct UnifyConfig {
    /// Directory holding the exports; the combined workbook is written here too
    pub directory: PathBuf,
    /// Required filename prefix
    pub file_prefix: String,
    /// Required filename substring
    pub file_marker: String,
    /// How each export is read
    pub load: LoadOptions,
    /// Base name of the combined workbook
    pub base_name: String,
}

impl UnifyConfig {
    /// Config with the standard export conventions for `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            file_prefix: FILE_PREFIX.to_string(),
            file_marker: FILE_MARKER.to_string(),
            load: LoadOptions::default(),
            base_name: BASE_NAME.to_string(),
        }
    }
}
