// prioplay - priority playback scheduler
// Reads commands from stdin, simulates playback, prints results to stdout

use anyhow::Result;
use clap::Parser;
use prioplay::{config::Config, ui::App};
use std::path::PathBuf;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prioplay")]
#[command(about = "Queue tracks at six priority levels and simulate playback time")]
struct Args {
    /// Enable developer logging (stderr instead of the log file)
    #[arg(long)]
    dev: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn init_logging(dev: bool, config: &Config) -> Result<WorkerGuard> {
    let base_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    // stdout carries command output, so logs go to stderr or a file
    let (writer, guard) = if dev {
        tracing_appender::non_blocking(std::io::stderr())
    } else {
        std::fs::create_dir_all(&config.logging.directory)?;
        let file_appender =
            tracing_appender::rolling::daily(&config.logging.directory, &config.logging.file_name);
        tracing_appender::non_blocking(file_appender)
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(dev)
        .with_env_filter(base_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load config - falls back to defaults if missing
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Keep the guard alive so buffered log lines get flushed on exit
    let _guard = init_logging(args.dev, &config)?;
    info!("prioplay starting up");

    let mut app = App::new(config)?;
    app.run(BufReader::new(stdin()), stdout()).await?;

    Ok(())
}
