// crates/bar100-core/src/error.rs

use thiserror::Error;

use bar100_parser::ParserError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to parse input log: {0}")]
    Parser(#[from] ParserError),

    #[error("calibration window must be at least 1 sample")]
    InvalidWindow,

    #[error("calibration window needs {window} samples but the log only has {available}")]
    InsufficientData { window: usize, available: usize },

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("chart rendering failed for {chart}: {message}")]
    Render { chart: String, message: String },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
