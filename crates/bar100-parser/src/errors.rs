use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("data row {line_index} has {found} fields, expected {expected}")]
    RowFormat {
        line_index: usize,
        found: usize,
        expected: usize,
    },

    #[error("data row {line_index} column '{column}' invalid: {message}")]
    FieldParse {
        line_index: usize,
        column: &'static str,
        message: String,
    },

    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file did not contain any data rows")]
    EmptyData,
}
