pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::memory_store::MemoryStore;
pub use config::CalcConfig;
pub use core::divider::{divide, SafeDivider};
pub use core::engine::{BatchReport, CalcEngine};
pub use core::formatter::{format_result, ResultFormatter};
pub use domain::model::{DivisionOutcome, DivisionRequest, ErrorStyle, OverflowPolicy};
pub use utils::error::{CalcError, ErrorCode, Result};
