//! CLI entry point for the gradebook tool.
//!
//! Runs the interactive menu by default, or prints a single report,
//! statistics view, or CSV export when given a subcommand.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gradebook::analyzers::aggregate::{build_report, build_statistics};
use gradebook::menu::run_menu;
use gradebook::output::{NO_REPORT_DATA, append_records, report, statistics, to_json};
use gradebook::parser::load_roster;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Student grade reports from a plain-text roster", long_about = None)]
struct Cli {
    /// Roster file with one `name,score1,score2,...` line per student
    #[arg(short, long, global = true, default_value = "grades.txt")]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,
    /// Print the detailed per-student report
    Report {
        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print class statistics and the grade distribution
    Stats {
        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Append per-student results to a CSV file
    Export {
        /// CSV file to append results to
        #[arg(short, long, default_value = "summary.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: stderr for diagnostics + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gradebook.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG_JSON").unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = std::io::stdin().lock();
            run_menu(&cli.file, stdin, &mut stdout)?;
        }
        Commands::Report { json } => {
            let snapshot = load_roster(&cli.file);
            let text = if json {
                to_json(&build_report(&snapshot))?
            } else {
                report(&snapshot)
            };
            writeln!(stdout, "{text}")?;
        }
        Commands::Stats { json } => {
            let snapshot = load_roster(&cli.file);
            let text = if json {
                to_json(&build_statistics(&snapshot))?
            } else {
                statistics(&snapshot)
            };
            writeln!(stdout, "{text}")?;
        }
        Commands::Export { output } => {
            let snapshot = load_roster(&cli.file);
            match build_report(&snapshot) {
                Some(built) => {
                    append_records(&output, &built).with_context(|| {
                        format!("Failed to write export to {}", output.display())
                    })?;
                    info!(
                        output = %output.display(),
                        students = built.total_students,
                        "Export complete"
                    );
                }
                None => {
                    warn!(source = %cli.file.display(), "Nothing to export");
                    writeln!(stdout, "{NO_REPORT_DATA}")?;
                }
            }
        }
    }

    Ok(())
}
