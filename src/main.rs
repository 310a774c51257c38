//! CLI entry point for the social media stats tool.
//!
//! With no subcommand, runs both aggregation pipelines over
//! `socialMedia.csv` in the working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use social_media_stats::analyzers::analyzer::{
    AVG_OUTPUT_FILE, INPUT_FILE, TIME_OUTPUT_FILE, by_date, by_platform,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "social_media_stats")]
#[command(about = "Average post likes from a social media export", long_about = None)]
struct Cli {
    /// CSV export to read
    #[arg(short, long, global = true, default_value = INPUT_FILE)]
    input: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Average likes per date, sorted by the date text
    ByDate {
        /// CSV file to write
        #[arg(short, long, default_value = TIME_OUTPUT_FILE)]
        output: String,
    },
    /// Average likes per platform and post type, in first-seen order
    ByPlatform {
        /// CSV file to write
        #[arg(short, long, default_value = AVG_OUTPUT_FILE)]
        output: String,
    },
    /// Run both pipelines
    All {
        /// CSV file for per-date averages
        #[arg(long, default_value = TIME_OUTPUT_FILE)]
        time_output: String,

        /// CSV file for per-platform averages
        #[arg(long, default_value = AVG_OUTPUT_FILE)]
        avg_output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing()?;

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::All {
        time_output: TIME_OUTPUT_FILE.to_string(),
        avg_output: AVG_OUTPUT_FILE.to_string(),
    }) {
        Commands::ByDate { output } => {
            by_date(&cli.input, &output)?;
        }
        Commands::ByPlatform { output } => {
            by_platform(&cli.input, &output)?;
        }
        Commands::All {
            time_output,
            avg_output,
        } => {
            by_date(&cli.input, &time_output)?;
            by_platform(&cli.input, &avg_output)?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set.
fn init_tracing() -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("social_media_stats.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
