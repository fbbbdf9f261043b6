//! # STOX CLI Library
//!
//! Core library for the STOX terminal application.
//!
//! ## Module Organization
//! ```text
//! stox_cli_lib/
//! ├── lib.rs          ◄─── You are here (flags, logging, run)
//! ├── menu.rs         ◄─── Prompt loop over BufRead / Write
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports
//! │   ├── config.rs   ◄─── stox.toml + STOX_* overrides
//! │   └── session.rs  ◄─── Ledger, file store, receipt layout
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog actions
//! │   ├── employee.rs ◄─── Roster actions
//! │   ├── sale.rs     ◄─── Checkout and transaction log
//! │   └── files.rs    ◄─── Save / load
//! └── error.rs        ◄─── CLI error type
//! ```

pub mod commands;
pub mod error;
pub mod menu;
pub mod state;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use error::CliResult;
use menu::Menu;
use state::{Session, StoxConfig};

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,stox=info";

/// Command line flags.
#[derive(Debug, Parser)]
#[command(name = "stox", version, about = "STOX supermarket inventory terminal")]
pub struct Cli {
    /// Path to stox.toml (defaults to the platform config directory)
    #[arg(long, env = "STOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding products.csv, employees.csv, barcodes/ and receipts/
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Start with an empty catalog and roster
    #[arg(long)]
    pub no_seed: bool,
}

impl Cli {
    /// Builds the effective configuration: file, then environment, then flags.
    pub fn resolve_config(&self) -> CliResult<StoxConfig> {
        let mut config = StoxConfig::load(self.config.as_deref())?;

        if let Some(dir) = &self.data_dir {
            config.files.data_dir = dir.clone();
        }
        if self.no_seed {
            config.session.seed_sample_data = false;
        }

        Ok(config)
    }
}

/// Runs the terminal application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn,stox=info, can be overridden with RUST_LOG          │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • stox.toml ◄ STOX_* ◄ --flags                                      │
/// │                                                                         │
/// │  3. Open Session ─────────────────────────────────────────────────────► │
/// │     • Create data / barcode / receipt directories                       │
/// │     • Seed Milk, Bread, Apple and two employees                         │
/// │                                                                         │
/// │  4. Menu Loop ────────────────────────────────────────────────────────► │
/// │     • Until "0" or end of input                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    match start(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), error = %e, "STOX stopped");
            eprintln!("✗ [{}] {}", e.code(), e);
            ExitCode::FAILURE
        }
    }
}

fn start(cli: Cli) -> CliResult<()> {
    let config = cli.resolve_config()?;
    info!(
        data_dir = %config.files.data_dir.display(),
        store = %config.store.name,
        "Starting STOX"
    );

    let mut session = Session::open(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut session, stdin.lock(), stdout.lock()).run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stox_core=trace` - Show trace for the core only
/// - Default: `warn,stox=info`
///
/// Logs go to stderr so they never interleave with menu output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
