//! Feed line records into an admittance accumulator.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};
use ymat_core::{YMatrixAccumulator, YMatrixError};

use crate::records::{RecordReader, StopReason};

/// Errors from ingesting a line-record source
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot open {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while reading records: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Matrix(#[from] YMatrixError),
}

/// Outcome of one ingestion run.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestSummary {
    /// Records applied to the accumulator
    pub records: usize,
    /// Records read but rejected (zero impedance)
    pub skipped: usize,
    /// Highest node index among applied records; the report dimension
    pub max_node: u64,
    /// Why scanning stopped
    pub stop: StopReason,
}

/// Read every record from `reader` and add each line to `ymat`.
///
/// Zero-impedance lines are skipped with a warning. Storage exhaustion
/// aborts ingestion immediately.
pub fn ingest<R: BufRead>(
    reader: R,
    ymat: &mut YMatrixAccumulator,
) -> Result<IngestSummary, IngestError> {
    let mut records = RecordReader::new(reader);
    let mut applied = 0;
    let mut skipped = 0;
    let mut max_node = 0;

    while let Some(record) = records.next_record()? {
        match ymat.add_line(record.node1, record.node2, record.params) {
            Ok(()) => {
                applied += 1;
                max_node = max_node.max(record.max_node());
            }
            Err(err @ YMatrixError::ZeroImpedance { .. }) => {
                warn!(record = records.records_read(), "skipping line: {}", err);
                skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let stop = records
        .stop_reason()
        .cloned()
        .unwrap_or(StopReason::EndOfInput);
    debug!(
        applied,
        skipped,
        max_node,
        entries = ymat.len(),
        slots = ymat.slot_count(),
        "ingestion finished"
    );

    Ok(IngestSummary {
        records: applied,
        skipped,
        max_node,
        stop,
    })
}

/// Open `path` and ingest it.
pub fn ingest_path(
    path: &Path,
    ymat: &mut YMatrixAccumulator,
) -> Result<IngestSummary, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Reading line records from {}", path.display());
    ingest(BufReader::new(file), ymat)
}
