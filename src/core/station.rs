use crate::core::{CupSize, Dispenser, ReportSink, Result, ServeOutcome, Stock};
use crate::utils::error::DispenserError;

/// 咖啡機加上報表：每次出杯（成功或失敗）都寫一行紀錄
pub struct CoffeeStation<R: ReportSink> {
    dispenser: Dispenser,
    report: R,
}

impl<R: ReportSink> CoffeeStation<R> {
    pub fn new(report: R) -> Self {
        Self::with_dispenser(Dispenser::new(), report)
    }

    pub fn with_dispenser(dispenser: Dispenser, report: R) -> Self {
        Self { dispenser, report }
    }

    /// 回傳的訊息與寫入報表的文字相同。
    /// 報表寫入失敗時庫存變動不會回滾，錯誤中帶著該次的訊息。
    pub fn serve(&mut self, size: CupSize, sugar_spoons: i32) -> Result<ServeOutcome> {
        let outcome = self.dispenser.serve(size, sugar_spoons);
        let message = outcome.message();

        if outcome.is_served() {
            tracing::info!("☕ {}", message);
        } else {
            tracing::warn!(
                "🚫 Rejected {} with {} sugar: {}",
                size,
                sugar_spoons,
                message
            );
        }
        tracing::debug!("Remaining stock - {}", self.dispenser.stock());

        if let Err(e) = self.report.append_line(&message) {
            tracing::error!("❌ Failed to write report line: {}", e);
            return Err(match e {
                DispenserError::IoError(source) => DispenserError::ReportWriteError { message, source },
                other => other,
            });
        }

        Ok(outcome)
    }

    pub fn stock(&self) -> Stock {
        self.dispenser.stock()
    }

    pub fn dispenser(&self) -> &Dispenser {
        &self.dispenser
    }

    pub fn report(&self) -> &R {
        &self.report
    }

    pub fn into_report(self) -> R {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::report::MemoryReport;

    struct BrokenReport;

    impl ReportSink for BrokenReport {
        fn append_line(&mut self, _message: &str) -> Result<()> {
            Err(DispenserError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_every_outcome_is_reported() {
        let mut station = CoffeeStation::new(MemoryReport::new());

        let served = station.serve(CupSize::Medium, 2).unwrap();
        let rejected = station.serve(CupSize::Medium, -1).unwrap();

        let messages = station.report().messages();
        assert_eq!(messages, vec![served.message(), rejected.message()]);
    }

    #[test]
    fn test_report_failure_keeps_served_stock() {
        let mut station = CoffeeStation::new(BrokenReport);

        let err = station.serve(CupSize::Small, 1).unwrap_err();
        match err {
            DispenserError::ReportWriteError { message, .. } => {
                assert_eq!(message, "Coffee Small served with 1 sugar(s)");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(station.stock().cups, 9);
    }

    #[test]
    fn test_station_over_borrowed_report() {
        let mut report = MemoryReport::new();
        {
            let mut station = CoffeeStation::new(&mut report);
            station.serve(CupSize::Large, 0).unwrap();
        }
        assert_eq!(report.messages(), vec!["Coffee Large served with 0 sugar(s)"]);
    }
}
