//! # ymat-io: Line-Record Ingestion and Matrix Reports
//!
//! Reads whitespace-separated `node1 node2 R X C` records into a
//! [`YMatrixAccumulator`](ymat_core::YMatrixAccumulator) and renders the
//! accumulated matrix as text or JSON.
//!
//! ## Modules
//!
//! - [`records`] - Token-stream scanner producing [`LineRecord`]s
//! - [`ingest`] - Feeds records into the accumulator and tracks the matrix size
//! - [`report`] - Dense, sparse and JSON renderers
//! - [`config`] - TOML configuration for reports and logging

pub mod config;
pub mod ingest;
pub mod records;
pub mod report;

pub use config::{load_config, LoggingConfig, YmatConfig};
pub use ingest::{ingest, ingest_path, IngestError, IngestSummary};
pub use records::{LineRecord, RecordReader, StopReason};
pub use report::{render, render_dense, render_json, render_sparse, ReportConfig, ReportFormat};
