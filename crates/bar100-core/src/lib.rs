pub mod calibration;
pub mod config;
pub mod depth;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod plot;
pub mod processing;

pub use config::{PipelineConfig, DEFAULT_CALIBRATION_WINDOW};
pub use error::{PipelineError, Result};
pub use pipeline::PipelineRunSummary;
