use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Failures detected by the individual unify stages.
///
/// Sources are shared so outcomes carrying them can be cloned into UI messages.
#[derive(Error, Debug, Clone)]
pub enum UnifyError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Cannot list directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error("Cannot read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: Arc<calamine::XlsxError>,
    },

    #[error("Workbook {} contains no sheets", .0.display())]
    NoWorksheet(PathBuf),

    #[error("{file}: column '{column}' not found")]
    SchemaMismatch { file: String, column: String },

    #[error("{file}, row {row}: '{value}' does not start with an integer")]
    Parse {
        file: String,
        row: usize,
        value: String,
    },

    #[error("{0}")]
    EmptyResult(String),

    #[error("Cannot write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: Arc<rust_xlsxwriter::XlsxError>,
    },
}

pub type Result<T> = std::result::Result<T, UnifyError>;
