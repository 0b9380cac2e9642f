//! One build-and-report pass over an input file.

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::info;
use ymat_core::{YMatrixAccumulator, YMatrixError};
use ymat_io::{ingest_path, render, IngestError, IngestSummary, ReportConfig};

/// How a run ended, when it did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The matrix was built and written.
    Rendered(IngestSummary),
    /// The input file could not be opened.
    FileNotFound,
    /// The admittance store could not grow.
    Overflow,
}

/// Build the Y-matrix from `path` and write the report to `out`.
pub fn execute<W: Write>(path: &Path, report: &ReportConfig, out: &mut W) -> Result<Outcome> {
    let mut ymat = YMatrixAccumulator::new();

    let summary = match ingest_path(path, &mut ymat) {
        Ok(summary) => summary,
        Err(IngestError::NotFound { .. }) => return Ok(Outcome::FileNotFound),
        Err(IngestError::Matrix(YMatrixError::StorageExhausted { .. })) => {
            return Ok(Outcome::Overflow)
        }
        Err(err) => return Err(err.into()),
    };
    info!(
        "Built {}x{} matrix from {} line(s), {} stored entries",
        summary.max_node,
        summary.max_node,
        summary.records,
        ymat.len()
    );

    render(&ymat, summary.max_node, report, out)?;
    out.flush()?;
    ymat.reset();
    Ok(Outcome::Rendered(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_renders_report() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2 1.0 2.0 0.5").unwrap();

        let mut out = Vec::new();
        let outcome = execute(file.path(), &ReportConfig::default(), &mut out).unwrap();
        assert!(matches!(outcome, Outcome::Rendered(ref s) if s.max_node == 2));
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("2*2 Matrix\n"));
    }

    #[test]
    fn test_execute_missing_file() {
        let mut out = Vec::new();
        let outcome = execute(
            Path::new("/definitely/not/here.txt"),
            &ReportConfig::default(),
            &mut out,
        )
        .unwrap();
        assert_eq!(outcome, Outcome::FileNotFound);
        assert!(out.is_empty());
    }
}
