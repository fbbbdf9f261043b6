//! # State Module
//!
//! Everything the menu loop owns for the lifetime of the process.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  StoxConfig ──► Session::open                                           │
//! │                     │                                                   │
//! │        ┌────────────┼─────────────────┐                                 │
//! │        ▼            ▼                 ▼                                 │
//! │  InventoryLedger  FileStore     ReceiptLayout                           │
//! │  (in memory)      (data dir)    (store name, footer)                    │
//! │                                                                         │
//! │  Single owner, single thread: commands take `&mut Session`.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{SessionSettings, StoreSettings, StoxConfig, CONFIG_FILE_NAME};
pub use session::{seed_sample_data, Session};
