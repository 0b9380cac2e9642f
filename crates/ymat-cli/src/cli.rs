use clap::{CommandFactory, Parser, ValueHint};
use std::path::PathBuf;
use ymat_io::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "ymat",
    author,
    version,
    about = "Build a nodal admittance matrix from transmission-line records",
    long_about = None
)]
pub struct Cli {
    /// Set the logging level (logs go to stderr)
    #[arg(long)]
    pub log_level: Option<tracing::Level>,

    /// Report layout: dense, sparse or json
    #[arg(long)]
    pub format: Option<ReportFormat>,

    /// Optional TOML configuration file
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Line-record file (`node1 node2 R X C` per record); words are rejoined with spaces
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: Vec<String>,
}

impl Cli {
    /// Input path with any split words joined back together.
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(self.path.join(" "))
    }
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
