use std::fs;
use std::path::Path;

use csv::StringRecord;

use crate::errors::ParserError;
use crate::model::{DepthLog, Sample};

const FIELDS_PER_ROW: usize = 3;

/// Read and parse a raw depth log from disk. The whole file is loaded before
/// parsing; these logs are a single deployment run, not high-volume data.
pub fn parse_depth_file(path: &Path) -> Result<DepthLog, ParserError> {
    let content = fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_depth_log(&content)
}

/// Parse raw log content: comma-delimited, no header, one
/// `timestamp,temperature,pressure` record per line.
///
/// Value ranges are not validated here; a negative pressure parses fine and
/// is the calibration stage's problem.
pub fn parse_depth_log(content: &str) -> Result<DepthLog, ParserError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut samples = Vec::new();

    for (line_index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| ParserError::Csv { source })?;
        samples.push(parse_row(line_index, &record)?);
    }

    if samples.is_empty() {
        return Err(ParserError::EmptyData);
    }

    Ok(DepthLog::new(samples))
}

fn parse_row(line_index: usize, record: &StringRecord) -> Result<Sample, ParserError> {
    if record.len() != FIELDS_PER_ROW {
        return Err(ParserError::RowFormat {
            line_index,
            found: record.len(),
            expected: FIELDS_PER_ROW,
        });
    }

    let timestamp = parse_i64(line_index, record.get(0).unwrap_or(""), "timestamp")?;
    let temperature_c = parse_f64(line_index, record.get(1).unwrap_or(""), "temperature")?;
    let pressure_mbar = parse_f64(line_index, record.get(2).unwrap_or(""), "pressure")?;

    Ok(Sample {
        timestamp,
        temperature_c,
        pressure_mbar,
    })
}

fn parse_i64(line_index: usize, value: &str, column: &'static str) -> Result<i64, ParserError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|err| ParserError::FieldParse {
            line_index,
            column,
            message: format!("failed to parse '{}' as integer: {err}", value.trim()),
        })
}

fn parse_f64(line_index: usize, value: &str, column: &'static str) -> Result<f64, ParserError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|err| ParserError::FieldParse {
            line_index,
            column,
            message: format!("failed to parse '{}' as float: {err}", value.trim()),
        })
}
