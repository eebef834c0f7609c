//! Trace loading and report composition.

use std::io::{Read, Write};
use std::path::Path;

use tracing::info;

use crate::error::ReportError;
use crate::format::format_request;
use crate::types::{FormatConfig, Trace};

/// Build the full report: header line, then one record per visible request.
pub fn build_report(trace: &Trace, config: &FormatConfig) -> String {
    let mut report = format!("Trace start time: {}\n", trace.timestamp);
    for request in &trace.requests {
        report.push_str(&format_request(request, config));
    }
    report
}

/// Build the report and write it to `writer`.
pub fn write_report<W: Write>(
    writer: &mut W,
    trace: &Trace,
    config: &FormatConfig,
) -> Result<(), ReportError> {
    let report = build_report(trace, config);
    writer
        .write_all(report.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(ReportError::Write)
}

/// Decode a trace from a JSON string.
pub fn parse_trace(json: &str) -> Result<Trace, ReportError> {
    let trace: Trace = serde_json::from_str(json)?;
    info!(
        "Loaded trace started at {} with {} request(s)",
        trace.timestamp,
        trace.requests.len()
    );
    Ok(trace)
}

/// Read and decode a trace export from `path`.
pub fn load_trace(path: &Path) -> Result<Trace, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_trace(&content)
}

/// Read and decode a trace export from any reader, e.g. stdin.
pub fn read_trace<R: Read>(mut reader: R) -> Result<Trace, ReportError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| ReportError::Io {
            path: "<stdin>".into(),
            source,
        })?;
    parse_trace(&content)
}
