use crate::utils::error::Result;

/// 出杯結果的稽核紀錄出口。實作負責加上時間戳記。
pub trait ReportSink {
    fn append_line(&mut self, message: &str) -> Result<()>;
}

impl<R: ReportSink + ?Sized> ReportSink for &mut R {
    fn append_line(&mut self, message: &str) -> Result<()> {
        (**self).append_line(message)
    }
}
