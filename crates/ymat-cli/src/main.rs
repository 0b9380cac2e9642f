use clap::Parser;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;
use ymat_cli::cli::Cli;
use ymat_cli::run::{execute, Outcome};
use ymat_io::{load_config, YmatConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path),
        None => Ok(YmatConfig::default()),
    };

    let level = cli
        .log_level
        .or_else(|| {
            config
                .as_ref()
                .ok()
                .and_then(|c| c.logging.level.parse::<Level>().ok())
        })
        .unwrap_or(Level::WARN);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(format) = cli.format {
        config.report.format = format;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match execute(&cli.input_path(), &config.report, &mut out) {
        Ok(Outcome::Rendered(_)) => ExitCode::SUCCESS,
        Ok(Outcome::FileNotFound) => {
            println!("File Not Found");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Overflow) => {
            println!("Overflow!");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Y-matrix build failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
