// crates/bar100-core/src/config.rs

use std::path::{Path, PathBuf};

/// Leading samples averaged for the sea-level baseline. The field capture
/// workflow calibrates on 19 samples; pass a different window explicitly if
/// the deployment protocol changes.
pub const DEFAULT_CALIBRATION_WINDOW: usize = 19;

/// Everything a pipeline run needs to know up front. Built once by the
/// caller and passed down; nothing here is read from globals.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding the raw log. Outputs are written here too.
    pub input_dir: PathBuf,
    /// Raw log file name, e.g. `DEPTH.txt`.
    pub input_file: String,
    /// Calibration window size in samples.
    pub window: usize,
}

impl PipelineConfig {
    pub fn new(input_dir: impl Into<PathBuf>, input_file: impl Into<String>) -> Self {
        Self {
            input_dir: input_dir.into(),
            input_file: input_file.into(),
            window: DEFAULT_CALIBRATION_WINDOW,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(&self.input_file)
    }

    /// `<basename>_corrected.csv`, next to the input file.
    pub fn output_csv_path(&self) -> PathBuf {
        self.input_dir
            .join(format!("{}_corrected.csv", self.input_basename()))
    }

    /// `<basename><suffix>.png`, next to the input file.
    pub fn chart_path(&self, suffix: &str) -> PathBuf {
        self.input_dir
            .join(format!("{}{}.png", self.input_basename(), suffix))
    }

    fn input_basename(&self) -> String {
        Path::new(&self.input_file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_file.clone())
    }
}
