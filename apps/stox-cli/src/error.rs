//! # CLI Error Type
//!
//! Unified error type for menu commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in STOX                                   │
//! │                                                                         │
//! │  Menu action                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  CliResult<String>                                               │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad typing? ───── CliError::InvalidInput ─────────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  File error? ───── StoreError ─────────────────► CliError ──────►│  │
//! │  │         │                                          ▲            │  │
//! │  │         ▼                                          │            │  │
//! │  │  Domain error? ─── CoreError ──────────────────────┘            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The menu prints "✗ [CODE] message" and keeps looping. Only Config      │
//! │  (at startup) and Terminal (stdin/stdout gone) end the process.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;

use stox_core::CoreError;
use stox_store::StoreError;
use thiserror::Error;

/// Short machine-readable category, printed in front of every error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unknown product or employee
    NotFound,

    /// Input failed a field rule
    ValidationError,

    /// Not enough units on the shelf
    InsufficientStock,

    /// Reading or writing a file failed
    FileError,

    /// File contents were rejected
    ParseError,

    /// Configuration could not be loaded
    ConfigError,

    /// The terminal itself failed
    TerminalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::FileError => "FILE_ERROR",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::TerminalError => "TERMINAL_ERROR",
        };
        f.write_str(code)
    }
}

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// `stox.toml` could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// The user typed something that does not parse.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading stdin or writing stdout failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl CliError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        CliError::Config(message.into())
    }

    /// Category used when printing the error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Config(_) => ErrorCode::ConfigError,
            CliError::Store(StoreError::Io { .. }) => ErrorCode::FileError,
            CliError::Store(StoreError::Core(e)) | CliError::Core(e) => core_code(e),
            CliError::InvalidInput(_) => ErrorCode::ValidationError,
            CliError::Terminal(_) => ErrorCode::TerminalError,
        }
    }

    /// True when the menu loop cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Terminal(_) | CliError::Config(_))
    }
}

fn core_code(err: &CoreError) -> ErrorCode {
    match err {
        CoreError::ProductNotFound(_) => ErrorCode::NotFound,
        CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
        CoreError::ParseFailure { .. } => ErrorCode::ParseError,
        CoreError::InvalidPrice { .. }
        | CoreError::InvalidQuantity { .. }
        | CoreError::UnsupportedSymbol { .. }
        | CoreError::SaleNotOpen(_)
        | CoreError::IdsExhausted { .. }
        | CoreError::Validation(_) => ErrorCode::ValidationError,
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use stox_core::ProductId;

    #[test]
    fn test_codes() {
        let not_found: CliError = CoreError::ProductNotFound(ProductId::new(9)).into();
        assert_eq!(not_found.code(), ErrorCode::NotFound);

        let parse: CliError = StoreError::Core(CoreError::parse(2, "bad")).into();
        assert_eq!(parse.code(), ErrorCode::ParseError);

        let file_err: CliError = StoreError::io("x.csv", io::Error::from(io::ErrorKind::NotFound)).into();
        assert_eq!(file_err.code(), ErrorCode::FileError);
        assert_eq!(file_err.code().to_string(), "FILE_ERROR");
    }

    #[test]
    fn test_only_terminal_and_config_are_fatal() {
        assert!(CliError::Terminal(io::Error::from(io::ErrorKind::BrokenPipe)).is_fatal());
        assert!(CliError::config("bad toml").is_fatal());
        assert!(!CliError::invalid_input("abc is not a number").is_fatal());
        assert!(!CliError::from(CoreError::InvalidQuantity { quantity: 0 }).is_fatal());
    }
}
