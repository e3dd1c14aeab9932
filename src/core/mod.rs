pub mod dispenser;
pub mod station;

pub use crate::domain::model::{CupSize, ServeOutcome, Stock};
pub use crate::domain::ports::ReportSink;
pub use crate::utils::error::Result;
pub use dispenser::Dispenser;
pub use station::CoffeeStation;
