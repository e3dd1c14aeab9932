pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileReport, MemoryReport};
pub use config::{DispenserConfig, Order};
pub use core::{CoffeeStation, CupSize, Dispenser, ReportSink, ServeOutcome, Stock};
pub use utils::error::{DispenserError, Result};
