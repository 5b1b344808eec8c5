use std::fs;
use std::path::Path;

use bar100_core::error::PipelineError;
use bar100_core::{pipeline, PipelineConfig};
use bar100_parser::ParserError;

const SURFACE_LOG: &str = "0,10.0,1000.0\n1000,10.0,1000.0\n2000,10.0,1000.0\n";

fn write_input(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("failed to write test input");
}

fn dive_log(rows: usize) -> String {
    let mut out = String::new();
    for i in 0..rows {
        // Surface for the calibration window, then a steady descent.
        let pressure = if i < 20 {
            1004.0
        } else {
            1004.0 + (i as f64 - 19.0) * 55.0
        };
        let temperature = 12.4 - i as f64 * 0.01;
        out.push_str(&format!("{},{:.2},{:.2}\n", i as i64 * 1000, temperature, pressure));
    }
    out
}

#[test]
fn full_run_writes_csv_and_charts() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_input(dir.path(), "DEPTH.txt", &dive_log(120));

    let config = PipelineConfig::new(dir.path(), "DEPTH.txt");
    let summary = pipeline::run(&config).expect("pipeline failed");

    assert_eq!(summary.rows, 120);
    assert_eq!(summary.baseline.window, 19);
    assert!((summary.baseline.mean_mbar - 1004.0).abs() < 1e-9);
    assert_eq!(summary.csv_path, dir.path().join("DEPTH_corrected.csv"));

    let content = fs::read_to_string(&summary.csv_path).expect("read output");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 121, "header plus one row per sample");
    assert_eq!(
        lines[0],
        "Timestamp,Degrees C,Original mbar,Corrected mbar,Depth in m"
    );

    // Timestamps survive verbatim.
    for (i, line) in lines[1..].iter().enumerate() {
        let timestamp = line.split(',').next().expect("timestamp field");
        assert_eq!(timestamp, (i as i64 * 1000).to_string());
    }

    assert_eq!(summary.chart_paths.len(), 3);
    for path in &summary.chart_paths {
        let meta = fs::metadata(path).expect("chart file missing");
        assert!(meta.len() > 0);
    }
}

#[test]
fn surface_scenario_corrects_to_standard_atmosphere() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_input(dir.path(), "DEPTH.txt", SURFACE_LOG);

    let config = PipelineConfig::new(dir.path(), "DEPTH.txt").with_window(3);
    let summary = pipeline::run(&config).expect("pipeline failed");

    assert!((summary.baseline.mean_mbar - 1000.0).abs() < 1e-12);

    let content = fs::read_to_string(&summary.csv_path).expect("read output");
    for line in content.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields[3], "1013.25");
        assert_eq!(fields[4], "0.00");
    }
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_input(dir.path(), "DEPTH.txt", &dive_log(60));

    let config = PipelineConfig::new(dir.path(), "DEPTH.txt");
    let first = pipeline::run(&config).expect("first run failed");
    let first_bytes = fs::read(&first.csv_path).expect("read first output");

    let second = pipeline::run(&config).expect("second run failed");
    let second_bytes = fs::read(&second.csv_path).expect("read second output");

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn window_equal_to_row_count_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_input(dir.path(), "DEPTH.txt", SURFACE_LOG);

    let config = PipelineConfig::new(dir.path(), "DEPTH.txt").with_window(3);
    assert!(pipeline::run(&config).is_ok());
}

#[test]
fn window_beyond_row_count_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_input(dir.path(), "DEPTH.txt", SURFACE_LOG);

    let config = PipelineConfig::new(dir.path(), "DEPTH.txt").with_window(4);
    let err = pipeline::run(&config).expect_err("run should fail");
    match err {
        PipelineError::InsufficientData { window, available } => {
            assert_eq!(window, 4);
            assert_eq!(available, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unparsable_field_aborts_with_row_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_input(
        dir.path(),
        "DEPTH.txt",
        "0,10.0,1000.0\n1000,NaNtext,1000.0\n2000,10.0,1000.0\n",
    );

    let config = PipelineConfig::new(dir.path(), "DEPTH.txt").with_window(3);
    let err = pipeline::run(&config).expect_err("run should fail");
    match err {
        PipelineError::Parser(ParserError::FieldParse {
            line_index, column, ..
        }) => {
            assert_eq!(line_index, 1);
            assert_eq!(column, "temperature");
        }
        other => panic!("unexpected error: {other}"),
    }

    // The run failed before any output was produced.
    assert!(!dir.path().join("DEPTH_corrected.csv").exists());
}

#[test]
fn missing_input_file_fails_with_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = PipelineConfig::new(dir.path(), "DEPTH.txt");
    let err = pipeline::run(&config).expect_err("run should fail");
    assert!(matches!(err, PipelineError::Parser(ParserError::Io { .. })));
}

#[test]
fn chart_files_use_input_basename() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_input(dir.path(), "dive42.txt", SURFACE_LOG);

    let config = PipelineConfig::new(dir.path(), "dive42.txt").with_window(3);
    let summary = pipeline::run(&config).expect("pipeline failed");

    assert_eq!(
        summary.chart_paths,
        vec![
            dir.path().join("dive42_temperature.png"),
            dir.path().join("dive42_correctedPressure.png"),
            dir.path().join("dive42_calculatedDepth.png"),
        ]
    );
}
