use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use docket::io::config_io::load_config;
use docket::io::source::{JsonFileSource, SampleSource, TaskSource};

#[derive(Parser, Debug)]
#[command(name = "dk", version, about = "Browse a task list in the terminal")]
struct Cli {
    /// JSON file holding the task list
    #[arg(value_name = "FILE", conflicts_with = "demo")]
    file: Option<PathBuf>,

    /// Browse a generated sample list of N tasks instead of a file
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "100")]
    demo: Option<usize>,

    /// Configuration file
    #[arg(long, value_name = "PATH", default_value = "docket.toml")]
    config: PathBuf,

    /// Log filter for docket.log
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    // Guard must live until exit so buffered log lines are flushed.
    let _log_guard = match init_tracing(&cli.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let source: Box<dyn TaskSource> = match (&cli.file, cli.demo) {
        (Some(path), _) => Box::new(JsonFileSource { path: path.clone() }),
        (None, Some(count)) => Box::new(SampleSource { count }),
        (None, None) => Box::new(SampleSource { count: 100 }),
    };
    info!(source = %source.describe(), "starting dk");

    if let Err(e) = docket::tui::run(source, config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Logs go to a file so they never write over the terminal UI.
fn init_tracing(log_level: &str) -> Result<WorkerGuard, Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(log_level)?;
    let file_appender = tracing_appender::rolling::never(".", "docket.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()?;
    Ok(guard)
}
