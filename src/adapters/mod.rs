// Adapters layer: concrete implementations of the domain ports.

pub mod report;

pub use report::{FileReport, MemoryReport, DEFAULT_REPORT_PATH};
