//! Text and JSON renderers for an accumulated Y-matrix.
//!
//! The dense report is the full `N × N` matrix, row-major, one row per line:
//!
//! ```text
//! 2*2 Matrix
//!       0.200000-      0.150000j      -0.200000+      0.400000j
//!      -0.200000+      0.400000j       0.200000-      0.150000j
//! ```
//!
//! Every cell is followed by one space, including the last in a row.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ymat_core::{Complex64, NodeId, YMatrixAccumulator};

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Full matrix, every cell printed
    #[default]
    Dense,
    /// One line per stored entry
    Sparse,
    /// Stored entries as a JSON document
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" => Ok(ReportFormat::Dense),
            "sparse" => Ok(ReportFormat::Sparse),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!(
                "unknown report format '{other}' (expected dense, sparse or json)"
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Dense => "dense",
            ReportFormat::Sparse => "sparse",
            ReportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Report settings, loadable from the `[report]` table of a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    /// Field width of each real/imaginary number
    #[serde(default = "default_width")]
    pub width: usize,
    /// Digits after the decimal point
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            width: default_width(),
            precision: default_precision(),
        }
    }
}

fn default_width() -> usize {
    14
}

fn default_precision() -> usize {
    6
}

/// Render `ymat` as a `dimension × dimension` report in the configured format.
pub fn render<W: Write>(
    ymat: &YMatrixAccumulator,
    dimension: u64,
    config: &ReportConfig,
    out: &mut W,
) -> io::Result<()> {
    match config.format {
        ReportFormat::Dense => render_dense(ymat, dimension, config, out),
        ReportFormat::Sparse => render_sparse(ymat, dimension, config, out),
        ReportFormat::Json => render_json(ymat, dimension, out),
    }
}

fn header<W: Write>(dimension: u64, out: &mut W) -> io::Result<()> {
    writeln!(out, "{dimension}*{dimension} Matrix")
}

/// Format one cell as `<re><sign><|im|>j`.
fn format_cell(value: Complex64, config: &ReportConfig) -> String {
    let (sign, magnitude) = if value.im >= 0.0 {
        ('+', value.im)
    } else {
        ('-', -value.im)
    };
    format!(
        "{:w$.p$}{}{:w$.p$}j",
        value.re,
        sign,
        magnitude,
        w = config.width,
        p = config.precision
    )
}

/// Full matrix, querying every `(i, j)` for `i, j` in `1..=dimension`.
pub fn render_dense<W: Write>(
    ymat: &YMatrixAccumulator,
    dimension: u64,
    config: &ReportConfig,
    out: &mut W,
) -> io::Result<()> {
    header(dimension, out)?;
    for i in 1..=dimension {
        for j in 1..=dimension {
            let cell = format_cell(ymat.get(NodeId::new(i), NodeId::new(j)), config);
            write!(out, "{cell} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Stored entries only, upper triangle in row-major order.
pub fn render_sparse<W: Write>(
    ymat: &YMatrixAccumulator,
    dimension: u64,
    config: &ReportConfig,
    out: &mut W,
) -> io::Result<()> {
    header(dimension, out)?;
    for entry in ymat.sorted_entries() {
        writeln!(
            out,
            "{} {} {:.p$} {:.p$}",
            entry.pair.low.value(),
            entry.pair.high.value(),
            entry.value.re,
            entry.value.im,
            p = config.precision
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport {
    dimension: u64,
    entries: Vec<JsonEntry>,
}

#[derive(Serialize)]
struct JsonEntry {
    node1: u64,
    node2: u64,
    g: f64,
    b: f64,
}

/// Stored entries as `{"dimension": N, "entries": [...]}`.
pub fn render_json<W: Write>(
    ymat: &YMatrixAccumulator,
    dimension: u64,
    out: &mut W,
) -> io::Result<()> {
    let report = JsonReport {
        dimension,
        entries: ymat
            .sorted_entries()
            .into_iter()
            .map(|entry| JsonEntry {
                node1: entry.pair.low.value(),
                node2: entry.pair.high.value(),
                g: entry.value.re,
                b: entry.value.im,
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
