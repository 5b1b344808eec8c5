// crates/bar100-core/src/export.rs

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::processing::CorrectedDataset;

pub const CSV_HEADER: [&str; 5] = [
    "Timestamp",
    "Degrees C",
    "Original mbar",
    "Corrected mbar",
    "Depth in m",
];

/// Write the corrected dataset as CSV. An existing file at `path` is
/// overwritten. Raw columns keep full float precision; corrected pressure
/// and depth are rounded to two decimals.
pub fn write_corrected_csv(dataset: &CorrectedDataset, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for record in &dataset.records {
        writer.write_record([
            record.timestamp.to_string(),
            record.temperature_c.to_string(),
            record.pressure_mbar.to_string(),
            format!("{:.2}", record.corrected_mbar),
            format!("{:.2}", record.depth_m),
        ])?;
    }
    writer.flush()?;

    info!(rows = dataset.len(), path = %path.display(), "corrected CSV written");
    Ok(())
}
