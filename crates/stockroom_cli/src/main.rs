//! Stockroom demo runner.
//!
//! # Responsibility
//! - Parse CLI flags into an `AppConfig`.
//! - Start logging, then run one or all demo programs.

mod programs;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stockroom_core::{init_logging, AppConfig, EntityId};

/// Keyed repository demo programs
#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Record-keeping demos built on a keyed repository", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level (trace|debug|info|warn|error); overrides STOCKROOM_LOG_LEVEL
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute log directory; overrides STOCKROOM_LOG_DIR
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Electronics and grocery shelves with error handling
    Warehouse,

    /// Patients and their prescriptions
    Healthcare {
        /// Patient whose prescriptions are listed
        #[arg(long, default_value_t = 2)]
        patient: EntityId,
    },

    /// Save inventory records to JSON and load them back
    Inventory {
        /// JSON file; defaults to <data dir>/inventory.json
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Process transactions against a savings account
    Finance,

    /// Grade students from a comma-separated file
    Grading {
        /// Input file; defaults to <data dir>/students.txt
        #[arg(long)]
        input: Option<PathBuf>,

        /// Report file; defaults to <data dir>/report.txt
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run every program in sequence
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    if let Some(dir) = cli.log_dir {
        config.log.log_dir = dir;
    }

    if let Err(err) = init_logging(&config.log) {
        eprintln!("warning: file logging disabled: {err}");
    }
    log::info!(
        "event=cli_start module=cli status=ok version={}",
        stockroom_core::core_version()
    );

    match cli.command {
        Command::Warehouse => programs::run_warehouse(),
        Command::Healthcare { patient } => programs::run_healthcare(patient),
        Command::Inventory { file } => {
            programs::run_inventory(&file.unwrap_or_else(|| config.inventory_file.clone()))
        }
        Command::Finance => programs::run_finance(),
        Command::Grading { input, output } => programs::run_grading(
            &input.unwrap_or_else(|| config.students_file.clone()),
            &output.unwrap_or_else(|| config.report_file.clone()),
        ),
        Command::All => {
            programs::run_warehouse()?;
            programs::run_healthcare(2)?;
            programs::run_inventory(&config.inventory_file)?;
            programs::run_finance()?;
            programs::run_grading(&config.students_file, &config.report_file)
        }
    }
}
