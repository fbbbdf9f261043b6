//! # STOX Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Parse flags, load `stox.toml`, apply environment overrides
//! 3. Open the data directory
//! 4. Seed sample data (unless disabled)
//! 5. Run the menu on stdin / stdout

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    stox_cli_lib::run()
}
